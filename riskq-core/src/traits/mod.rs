pub mod aggregator;
pub mod record;
pub mod sink;
pub mod store;

pub use aggregator::IAggregator;
pub use record::Record;
pub use sink::IFieldSink;
pub use store::IRiskDataStore;
