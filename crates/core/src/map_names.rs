//! Filename templates for the output maps.
//!
//! A template such as `fuels/FuelType-{timestep}.img` names one map per
//! timestep. `{timestep}` is the only variable and it must appear.

pub const TIMESTEP_VAR: &str = "timestep";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("The template is empty")]
    Empty,
    #[error("Unknown template variable \"{0}\"")]
    UnknownVariable(String),
    #[error("Missing \"}}\" after \"{{\" in the template")]
    Unterminated,
    #[error("The template must contain the variable {{timestep}}")]
    MissingTimestep,
}

/// Check that `template` only uses known variables and names the timestep.
pub fn check_template(template: &str) -> Result<(), TemplateError> {
    if template.is_empty() {
        return Err(TemplateError::Empty);
    }
    let mut has_timestep = false;
    for var in variables(template)? {
        if var != TIMESTEP_VAR {
            return Err(TemplateError::UnknownVariable(var.to_owned()));
        }
        has_timestep = true;
    }
    if !has_timestep {
        return Err(TemplateError::MissingTimestep);
    }
    Ok(())
}

/// Substitute the timestep into a template that passed [`check_template`].
pub fn render(template: &str, timestep: u32) -> String {
    template.replace(&format!("{{{}}}", TIMESTEP_VAR), &timestep.to_string())
}

fn variables(template: &str) -> Result<Vec<&str>, TemplateError> {
    let mut vars = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or(TemplateError::Unterminated)?;
        vars.push(&after[..close]);
        rest = &after[close + 1..];
    }
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_timestep_template() {
        assert_eq!(check_template("fuels/FuelType-{timestep}.img"), Ok(()));
    }

    #[test]
    fn rejects_missing_or_unknown_variables() {
        assert_eq!(
            check_template("fuels/FuelType.img"),
            Err(TemplateError::MissingTimestep)
        );
        assert_eq!(
            check_template("fuels/{species}-{timestep}.img"),
            Err(TemplateError::UnknownVariable("species".to_string()))
        );
        assert_eq!(
            check_template("fuels/{timestep.img"),
            Err(TemplateError::Unterminated)
        );
        assert_eq!(check_template(""), Err(TemplateError::Empty));
    }

    #[test]
    fn render_substitutes_every_occurrence() {
        assert_eq!(
            render("out/{timestep}/fuel-{timestep}.img", 30),
            "out/30/fuel-30.img"
        );
    }

    #[test]
    fn error_messages_name_the_variable() {
        assert_eq!(
            TemplateError::MissingTimestep.to_string(),
            "The template must contain the variable {timestep}"
        );
    }
}
