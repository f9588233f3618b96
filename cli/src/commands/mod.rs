mod helpers;
mod listing;
mod overview;
mod records;

pub(crate) use listing::Listing;
pub(crate) use overview::{cmd_dashboard, cmd_export, cmd_seed};
pub(crate) use records::{cmd_add, cmd_delete, cmd_list, cmd_show};
