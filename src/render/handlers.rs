use super::{Artifact, Folder, RenderContext};

fn header(ctx: &RenderContext<'_>, imports: &[Folder]) -> String {
    let mut out = String::from("using MediatR;\n");
    for folder in imports {
        out.push_str(&ctx.using(*folder));
    }
    out.push('\n');
    out.push_str(&ctx.namespace_line(Folder::Handlers));
    out.push('\n');
    out
}

/// Handler whose body only returns `result`.
fn stub(
    ctx: &RenderContext<'_>,
    imports: &[Folder],
    request: String,
    response: String,
    result: String,
) -> Artifact {
    let class = format!("{}Handler", request);
    let mut out = header(ctx, imports);
    out.push_str(&format!(
        "public sealed class {} : IRequestHandler<{}, {}>\n{{\n",
        class, request, response
    ));
    out.push_str(&format!(
        "    public Task<{}> Handle({} request, CancellationToken cancellationToken)\n    {{\n",
        response, request
    ));
    out.push_str(&result);
    out.push_str("    }\n}\n");
    Artifact::new(Folder::Handlers, class, out)
}

fn command_stub(ctx: &RenderContext<'_>, verb: &str, past_tense: &str) -> Artifact {
    let request = format!("{}{}Command", verb, ctx.name());
    let response = format!("{}{}Response", verb, ctx.name());
    let result = format!(
        "        var response = new {}\n        {{\n            Success = true,\n            Message = \"{} {} successfully\"\n        }};\n\n        return Task.FromResult(response);\n",
        response,
        ctx.name(),
        past_tense
    );
    stub(ctx, &[Folder::Commands], request, response, result)
}

pub(super) fn create(ctx: &RenderContext<'_>) -> Artifact {
    command_stub(ctx, "Create", "created")
}

pub(super) fn update(ctx: &RenderContext<'_>) -> Artifact {
    command_stub(ctx, "Update", "updated")
}

pub(super) fn delete(ctx: &RenderContext<'_>) -> Artifact {
    command_stub(ctx, "Delete", "deleted")
}

pub(super) fn get_by_id(ctx: &RenderContext<'_>) -> Artifact {
    let request = format!("Get{}ByIdQuery", ctx.name());
    let result = format!("        return Task.FromResult(new {}());\n", ctx.dto_type());
    stub(
        ctx,
        &[Folder::Dtos, Folder::Queries],
        request,
        ctx.dto_type(),
        result,
    )
}

pub(super) fn get_all(ctx: &RenderContext<'_>) -> Artifact {
    let request = format!("GetAll{}Query", ctx.name());
    let response = format!("List<{}>", ctx.dto_type());
    let result = format!("        return Task.FromResult(new {}());\n", response);
    stub(ctx, &[Folder::Dtos, Folder::Queries], request, response, result)
}
