//! Domain data contracts exchanged with the processing server.

mod share;
mod status;

pub use share::{
    DEFAULT_RESOLUTION, FALLBACK_RESOLUTIONS, ShareRequest, fallback_resolutions,
    is_valid_share_url,
};
pub use status::{DownloadItem, StatusCategory};
