use super::{Artifact, Folder, RenderContext, initialized_field};

/// The DTO mirrors the entity: every property, key and audit fields included.
pub(super) fn dto(ctx: &RenderContext<'_>) -> Artifact {
    let mut out = format!("{}\n", ctx.namespace_line(Folder::Dtos));
    out.push_str(&format!("public class {}\n{{\n", ctx.dto_type()));
    for property in ctx.entity.properties() {
        out.push_str(&initialized_field(property.ty(), property.name()));
    }
    out.push_str("}\n");
    Artifact::new(Folder::Dtos, ctx.dto_type(), out)
}
