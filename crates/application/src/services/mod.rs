pub mod record_type_mapper;

pub use record_type_mapper::RecordTypeMapper;
