use super::{Artifact, Folder, RenderContext};
use crate::rules::{self, ValidationRule};

const RULE_INDENT: &str = "        ";
const CHAIN_INDENT: &str = "            ";

/// Renders `RuleFor(x => x.<name>)` followed by one chained call per line, with the
/// statement terminated after the last call.
fn rule_block(name: &str, rules: &[ValidationRule]) -> String {
    let mut out = format!("{}RuleFor(x => x.{})", RULE_INDENT, name);
    for call in rules.iter().flat_map(ValidationRule::render) {
        out.push('\n');
        out.push_str(CHAIN_INDENT);
        out.push_str(&call);
    }
    out.push_str(";\n");
    out
}

fn key_rule(ctx: &RenderContext<'_>) -> String {
    rule_block(&ctx.key.name, &[ValidationRule::NotEmpty])
}

/// Rule blocks for every non-key property, blank-line separated.
fn property_rules(ctx: &RenderContext<'_>) -> Vec<String> {
    ctx.entity
        .non_key_properties()
        .map(|p| rule_block(p.name(), &rules::validation_rules(p)))
        .collect()
}

fn validator(
    ctx: &RenderContext<'_>,
    target_folder: Folder,
    target: String,
    blocks: Vec<String>,
) -> Artifact {
    let class = format!("{}Validator", target);
    let mut out = format!(
        "using FluentValidation;\n{}\n{}\n",
        ctx.using(target_folder),
        ctx.namespace_line(Folder::Validators)
    );
    out.push_str(&format!(
        "public class {} : AbstractValidator<{}>\n{{\n",
        class, target
    ));
    out.push_str(&format!("    public {}()\n    {{\n", class));
    out.push_str(&blocks.join("\n"));
    out.push_str("    }\n}\n");
    Artifact::new(Folder::Validators, class, out)
}

pub(super) fn create(ctx: &RenderContext<'_>) -> Artifact {
    let target = format!("Create{}Command", ctx.name());
    validator(ctx, Folder::Commands, target, property_rules(ctx))
}

pub(super) fn update(ctx: &RenderContext<'_>) -> Artifact {
    let target = format!("Update{}Command", ctx.name());
    let mut blocks = vec![key_rule(ctx)];
    blocks.extend(property_rules(ctx));
    validator(ctx, Folder::Commands, target, blocks)
}

pub(super) fn get_by_id(ctx: &RenderContext<'_>) -> Artifact {
    let target = format!("Get{}ByIdQuery", ctx.name());
    validator(ctx, Folder::Queries, target, vec![key_rule(ctx)])
}
