pub mod calendar_mapper;

pub use calendar_mapper::CalendarMapper;
