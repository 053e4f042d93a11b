use super::{Artifact, Folder, RenderContext, initialized_field, outcome_fields};
use crate::rules;

/// Fields carried by the create and update commands.
fn command_fields(ctx: &RenderContext<'_>) -> String {
    ctx.entity
        .properties()
        .iter()
        .filter(|p| rules::is_command_field(p))
        .map(|p| initialized_field(p.ty(), p.name()))
        .collect()
}

fn header(ctx: &RenderContext<'_>) -> String {
    format!("using MediatR;\n\n{}\n", ctx.namespace_line(Folder::Commands))
}

fn request_open(verb: &str, ctx: &RenderContext<'_>) -> String {
    format!(
        "public sealed class {verb}{name}Command : IRequest<{verb}{name}Response>\n{{\n",
        verb = verb,
        name = ctx.name()
    )
}

fn response_open(verb: &str, ctx: &RenderContext<'_>) -> String {
    format!("public class {}{}Response\n{{\n", verb, ctx.name())
}

pub(super) fn create(ctx: &RenderContext<'_>) -> Artifact {
    let mut out = header(ctx);
    out.push_str(&request_open("Create", ctx));
    out.push_str(&command_fields(ctx));
    out.push_str("}\n\n");
    out.push_str(&response_open("Create", ctx));
    out.push_str(&ctx.key_field());
    out.push_str(outcome_fields());
    out.push_str("}\n");
    Artifact::new(Folder::Commands, format!("Create{}Command", ctx.name()), out)
}

pub(super) fn update(ctx: &RenderContext<'_>) -> Artifact {
    let mut out = header(ctx);
    out.push_str(&request_open("Update", ctx));
    out.push_str(&ctx.key_field());
    out.push_str(&command_fields(ctx));
    out.push_str("}\n\n");
    out.push_str(&response_open("Update", ctx));
    out.push_str(outcome_fields());
    out.push_str("}\n");
    Artifact::new(Folder::Commands, format!("Update{}Command", ctx.name()), out)
}

pub(super) fn delete(ctx: &RenderContext<'_>) -> Artifact {
    let mut out = header(ctx);
    out.push_str(&request_open("Delete", ctx));
    out.push_str(&ctx.key_field());
    out.push_str("}\n\n");
    out.push_str(&response_open("Delete", ctx));
    out.push_str(outcome_fields());
    out.push_str("}\n");
    Artifact::new(Folder::Commands, format!("Delete{}Command", ctx.name()), out)
}
