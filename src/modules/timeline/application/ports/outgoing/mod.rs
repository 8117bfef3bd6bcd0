pub mod timeline_repository;

pub use timeline_repository::{
    CreateTimelineEntryData, TimelineEntryResult, TimelineRepository, TimelineRepositoryError,
    UpdateTimelineEntryData,
};
