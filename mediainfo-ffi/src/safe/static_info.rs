//! Library-wide queries that need no open file.
//!
//! These pass a null handle to `MediaInfo_Option`, so they work before any
//! [`MediaInfo`](crate::safe::MediaInfo) instance exists.

use crate::safe::backend::Backend;
use crate::safe::error::{check_arg, Result};

pub const INFO_VERSION: &str = "Info_Version";
pub const INFO_PARAMETERS: &str = "Info_Parameters";
pub const INFO_CODECS: &str = "Info_Codecs";
pub const INFO_CAPACITIES: &str = "Info_Capacities";

/// Set or query a library-wide option.
pub fn static_option<B: Backend>(backend: &B, name: &str, value: &str) -> Result<String> {
    let name = check_arg("Option name", name)?;
    let value = check_arg("Option value", value)?;
    Ok(unsafe { backend.option(None, name, value) })
}

/// Library version string, e.g. `MediaInfoLib - v24.01`.
pub fn version<B: Backend>(backend: &B) -> Result<String> {
    static_option(backend, INFO_VERSION, "")
}

/// Every parameter the library knows, per stream kind.
pub fn parameters<B: Backend>(backend: &B) -> Result<String> {
    static_option(backend, INFO_PARAMETERS, "")
}

/// Known codecs.
pub fn codecs<B: Backend>(backend: &B) -> Result<String> {
    static_option(backend, INFO_CODECS, "")
}

/// Formats the library can read or write.
pub fn capacities<B: Backend>(backend: &B) -> Result<String> {
    static_option(backend, INFO_CAPACITIES, "")
}

#[cfg(feature = "native")]
impl crate::safe::MediaInfo<crate::safe::backend::NativeLibrary> {
    pub fn version() -> Result<String> {
        version(&crate::safe::backend::NativeLibrary)
    }

    pub fn parameters() -> Result<String> {
        parameters(&crate::safe::backend::NativeLibrary)
    }

    pub fn codecs() -> Result<String> {
        codecs(&crate::safe::backend::NativeLibrary)
    }

    pub fn capacities() -> Result<String> {
        capacities(&crate::safe::backend::NativeLibrary)
    }

    pub fn static_option(name: &str, value: &str) -> Result<String> {
        static_option(&crate::safe::backend::NativeLibrary, name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safe::error::MediaInfoError;
    use crate::safe::fake::{FakeLibrary, FAKE_VERSION};

    #[test]
    fn test_static_queries_need_no_instance() {
        let library = FakeLibrary::new();
        assert_eq!(version(&library).unwrap(), FAKE_VERSION);
        assert!(parameters(&library).unwrap().contains("Duration"));
        assert!(codecs(&library).unwrap().contains("AVC"));
        assert!(capacities(&library).unwrap().contains("Matroska"));
        assert_eq!(library.live_handles(), 0);
    }

    #[test]
    fn test_static_option_set_and_query() {
        let library = FakeLibrary::new();
        static_option(&library, "Language", "raw").unwrap();
        assert_eq!(static_option(&library, "Language", "").unwrap(), "raw");
    }

    #[test]
    fn test_static_option_rejects_interior_nul() {
        let library = FakeLibrary::new();
        assert!(matches!(
            static_option(&library, "Info\0Version", ""),
            Err(MediaInfoError::InvalidArg(_))
        ));
    }
}
