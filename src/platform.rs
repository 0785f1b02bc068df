use crate::constants::JOINT_SHARE_MIN_MAJOR;
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Whether title/text/url and files can go out in one native share call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointShare {
    /// Not a handheld Apple device.
    NotMobile,
    Mobile(OsVersion),
    /// Handheld device whose OS version could not be read.
    Unparsable,
}

impl JointShare {
    pub fn detect(user_agent: &str, app_version: &str) -> JointShare {
        if !is_handheld_apple(user_agent) {
            return JointShare::NotMobile;
        }
        match parse_os_version(app_version).or_else(|| parse_os_version(user_agent)) {
            Some(v) => JointShare::Mobile(v),
            None => JointShare::Unparsable,
        }
    }

    pub fn supported(self) -> bool {
        match self {
            JointShare::NotMobile => true,
            JointShare::Mobile(v) => v.major >= JOINT_SHARE_MIN_MAJOR,
            JointShare::Unparsable => false,
        }
    }
}

#[inline]
pub fn can_share_together(user_agent: &str, app_version: &str) -> bool {
    let support = JointShare::detect(user_agent, app_version);
    if support == JointShare::Unparsable {
        log::warn!("[platform] could not read OS version from {:?}", app_version);
    }
    support.supported()
}

fn is_handheld_apple(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    ["iphone", "ipad", "ipod"].iter().any(|d| ua.contains(d))
}

/// `OS <major>_<minor>[_<patch>]`, e.g. `CPU iPhone OS 15_4 like Mac OS X`.
static OS_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"OS (\d+)_(\d+)_?(\d+)?").expect("OS version regex should compile")
});

pub fn parse_os_version(s: &str) -> Option<OsVersion> {
    let caps = OS_VERSION.captures(s)?;
    let number = |i: usize| caps.get(i).map(|m| m.as_str().parse::<u32>());
    Some(OsVersion {
        major: number(1)?.ok()?,
        minor: number(2)?.ok()?,
        patch: number(3).and_then(Result::ok).unwrap_or(0),
    })
}
