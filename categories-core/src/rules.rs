use crate::model::Category;
use engine::validation::{FieldRule, RuleSet};

pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 65_535;

pub fn category_rules() -> RuleSet<Category> {
    RuleSet::new(vec![
        FieldRule::new(
            "name",
            |c: &Category| !c.name().trim().is_empty(),
            "name should not be empty",
        ),
        FieldRule::new(
            "name",
            |c: &Category| c.name().chars().count() <= NAME_MAX_LENGTH,
            "name must be shorter than or equal to 255 characters",
        ),
        FieldRule::new(
            "description",
            |c: &Category| {
                c.description()
                    .is_none_or(|d| d.chars().count() <= DESCRIPTION_MAX_LENGTH)
            },
            "description must be shorter than or equal to 65535 characters",
        ),
    ])
}
