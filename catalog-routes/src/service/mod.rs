mod accounts;
mod categories;

pub use accounts::AccountService;
pub use categories::{CategoryPatch, CategoryService};
