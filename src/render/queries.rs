use super::{Artifact, Folder, RenderContext};

fn header(ctx: &RenderContext<'_>) -> String {
    format!(
        "using MediatR;\n{}\n{}\n",
        ctx.using(Folder::Dtos),
        ctx.namespace_line(Folder::Queries)
    )
}

pub(super) fn get_by_id(ctx: &RenderContext<'_>) -> Artifact {
    let mut out = header(ctx);
    out.push_str(&format!(
        "public sealed class Get{}ByIdQuery : IRequest<{}>\n{{\n",
        ctx.name(),
        ctx.dto_type()
    ));
    out.push_str(&ctx.key_field());
    out.push_str("}\n");
    Artifact::new(Folder::Queries, format!("Get{}ByIdQuery", ctx.name()), out)
}

pub(super) fn get_all(ctx: &RenderContext<'_>) -> Artifact {
    let mut out = header(ctx);
    out.push_str(&format!(
        "public sealed class GetAll{}Query : IRequest<List<{}>>\n{{\n",
        ctx.name(),
        ctx.dto_type()
    ));
    out.push_str("    public string? Status { get; set; }\n");
    out.push_str("    public DateTime? StartDate { get; set; }\n");
    out.push_str("    public DateTime? EndDate { get; set; }\n");
    out.push_str("}\n");
    Artifact::new(Folder::Queries, format!("GetAll{}Query", ctx.name()), out)
}
