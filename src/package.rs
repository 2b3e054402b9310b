//! Package share-directory lookup.
//!
//! The resolver treats package resolution as an opaque lookup: given a
//! logical package name, find its installed share directory.

use std::path::{Path, PathBuf};

/// Locate the share directory of an installed package.
pub fn find_package_share(package: &str) -> Option<PathBuf> {
    // Sourced workspace first
    if let Ok(distro) = std::env::var("ROS_DISTRO") {
        let share = Path::new("/opt/ros").join(distro).join("share").join(package);
        if share.exists() {
            return Some(share);
        }
    }

    // Fallback: common distributions
    for distro in &["jazzy", "iron", "humble"] {
        let share = Path::new("/opt/ros").join(distro).join("share").join(package);
        if share.exists() {
            return Some(share);
        }
    }

    if let Ok(prefix_path) = std::env::var("AMENT_PREFIX_PATH") {
        for prefix in prefix_path.split(':') {
            let share = Path::new(prefix).join("share").join(package);
            if share.exists() {
                return Some(share);
            }
        }
    }

    None
}
