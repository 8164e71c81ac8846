//! Port adapters wiring external services into the application layer

mod ambee_adapter;
mod hf_inference_adapter;
mod sms_adapter;
mod thread_random;

pub use ambee_adapter::AmbeeAdapter;
pub use hf_inference_adapter::HfInferenceAdapter;
pub use sms_adapter::LogOnlySmsAdapter;
pub use thread_random::ThreadRandom;
