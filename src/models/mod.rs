pub mod category;
pub mod event;
pub mod organization;

pub use category::Category;
pub use event::{
    funding_progress, EventDetail, EventImage, EventRecord, EventSummary, HomeCard, HomeSummary,
    SearchHit, TicketType,
};
pub use organization::Organization;
