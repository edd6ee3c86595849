use core::fmt;

mod build_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub struct ApplicationMetadata {
    pub firmware_version: &'static str,
    pub rust_version: &'static str,
    pub profile: &'static str,
    pub git_dirty: bool,
}

impl ApplicationMetadata {
    pub const fn new() -> Self {
        Self {
            firmware_version: match build_info::GIT_VERSION {
                Some(version) => version,
                None => build_info::PKG_VERSION,
            },
            rust_version: build_info::RUSTC_VERSION,
            profile: build_info::PROFILE,
            git_dirty: match build_info::GIT_DIRTY {
                Some(dirty) => dirty,
                None => false,
            },
        }
    }
}

impl Default for ApplicationMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ApplicationMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "{:<20}: {}{} [{}]",
            "Version",
            self.firmware_version,
            if self.git_dirty { "-dirty" } else { "" },
            self.profile,
        ))?;
        f.write_fmt(format_args!(
            "\n{:<20}: {}",
            "Rustc Version", self.rust_version
        ))
    }
}
