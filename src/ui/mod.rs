pub mod ledger_view;
pub mod messages;
