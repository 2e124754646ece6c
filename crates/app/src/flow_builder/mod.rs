pub mod page;
pub mod ticket_modal;

pub use page::FlowBuilder;
