pub mod stub_upstream;

pub use stub_upstream::{StubUpstream, UpstreamScript};
