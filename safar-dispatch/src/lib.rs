pub mod detect;
pub mod dispatcher;
pub mod links;
pub mod mock;
pub mod pipeline;

pub use dispatcher::{ChannelDispatcher, DeliveryStrategy, DispatchTarget};
pub use pipeline::{PipelineSettings, SubmissionPipeline, SubmissionReceipt};
