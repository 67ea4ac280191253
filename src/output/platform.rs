//! Native platform channels: the system log (logcat, syslog) and the IDE debug channel.
//! Both hand text to something the OS owns, so flushing is the platform's business.

use crate::level::Level;

use super::{LogRecord, Output};
use std::io;

/// Native priority tiers, in the order most platform loggers define them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Fatal,
    Error,
    Warn,
    Info,
    Verbose,
    Debug,
}

impl From<Level> for Priority {
    fn from(level: Level) -> Self {
        match level {
            Level::Critical => Self::Fatal,
            Level::Error => Self::Error,
            Level::Warn => Self::Warn,
            Level::Info | Level::None => Self::Info,
            Level::Verbose => Self::Verbose,
            Level::Debug => Self::Debug,
        }
    }
}

impl Priority {
    /// `android_LogPriority` value understood by logd.
    #[must_use]
    pub const fn android_priority(self) -> u8 {
        match self {
            Self::Verbose => 2,
            Self::Debug => 3,
            Self::Info => 4,
            Self::Warn => 5,
            Self::Error => 6,
            Self::Fatal => 7,
        }
    }

    /// RFC 5424 severity code.
    #[must_use]
    pub const fn syslog_severity(self) -> u8 {
        match self {
            Self::Fatal => 2,
            Self::Error => 3,
            Self::Warn => 4,
            Self::Info => 6,
            Self::Verbose | Self::Debug => 7,
        }
    }
}

/// The native call a platform backend forwards to.
pub trait PlatformLog: Send + Sync {
    /// # Errors
    /// The channel could not accept the message.
    fn log(&self, priority: Priority, tag: Option<&str>, text: &str) -> io::Result<()>;
}

/// Forwards the body as-is; the platform adds its own time, tag and priority columns.
#[derive(Debug, Clone)]
pub struct SystemLogOutput<P> {
    channel: P,
}

impl<P: PlatformLog> SystemLogOutput<P> {
    pub const fn new(channel: P) -> Self {
        Self { channel }
    }
}

impl<P: PlatformLog> Output for SystemLogOutput<P> {
    fn render(&self, record: &LogRecord) -> String {
        record.message()
    }

    fn write(&self, record: &LogRecord, rendered: &str) -> Result<(), crate::Error> {
        self.channel
            .log(Priority::from(record.level), record.tag.as_deref(), rendered)?;
        Ok(())
    }
}

/// Debug consoles show raw text, so the line carries the full decoration.
#[derive(Debug, Clone)]
pub struct DebugChannelOutput<P> {
    channel: P,
}

impl<P: PlatformLog> DebugChannelOutput<P> {
    pub const fn new(channel: P) -> Self {
        Self { channel }
    }
}

impl<P: PlatformLog> Output for DebugChannelOutput<P> {
    fn render(&self, record: &LogRecord) -> String {
        let mut line = record.decorated();
        line.push('\n');
        line
    }

    fn write(&self, record: &LogRecord, rendered: &str) -> Result<(), crate::Error> {
        self.channel
            .log(Priority::from(record.level), None, rendered)?;
        Ok(())
    }
}

#[cfg(unix)]
pub use syslog::Syslog;

#[cfg(unix)]
mod syslog {
    use super::{PlatformLog, Priority};
    use chrono::Local;
    use std::io;
    use std::os::unix::net::UnixDatagram;
    use std::path::PathBuf;
    use std::sync::OnceLock;

    const LOG_USER: u8 = 1;

    /// Local syslog daemon over its datagram socket, RFC 3164 framing.
    #[derive(Debug)]
    pub struct Syslog {
        path: PathBuf,
        ident: String,
        socket: OnceLock<Option<UnixDatagram>>,
    }

    impl Default for Syslog {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Syslog {
        #[must_use]
        pub fn new() -> Self {
            let ident = std::env::current_exe()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .unwrap_or_else(|| "lightlog".to_string());
            Self {
                path: PathBuf::from("/dev/log"),
                ident,
                socket: OnceLock::new(),
            }
        }

        /// Non-default socket, mostly for tests.
        #[must_use]
        pub fn socket_path(mut self, path: impl Into<PathBuf>) -> Self {
            self.path = path.into();
            self
        }

        /// Used when a record carries no tag.
        #[must_use]
        pub fn ident(mut self, ident: impl Into<String>) -> Self {
            self.ident = ident.into();
            self
        }

        /// `<PRI>Mmm dd hh:mm:ss ident[pid]: text`
        #[must_use]
        pub fn frame(&self, priority: Priority, tag: Option<&str>, text: &str) -> String {
            let pri = LOG_USER * 8 + priority.syslog_severity();
            let stamp = Local::now().format("%b %e %H:%M:%S");
            let ident = tag.unwrap_or(&self.ident);
            format!("<{pri}>{stamp} {ident}[{}]: {text}", std::process::id())
        }

        fn connect(&self) -> Option<&UnixDatagram> {
            self.socket
                .get_or_init(|| {
                    let socket = UnixDatagram::unbound().ok()?;
                    socket.connect(&self.path).ok()?;
                    Some(socket)
                })
                .as_ref()
        }
    }

    impl PlatformLog for Syslog {
        fn log(&self, priority: Priority, tag: Option<&str>, text: &str) -> io::Result<()> {
            let socket = self
                .connect()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "no syslog socket"))?;
            socket.send(self.frame(priority, tag, text).as_bytes())?;
            Ok(())
        }
    }
}

#[cfg(unix)]
pub use logd::Logd;

/// Android's log daemon. Its socket exists only on Android, but the framing is plain bytes
/// over a datagram socket, so any Unix host can exercise it against a local socket.
#[cfg(unix)]
mod logd {
    use super::{PlatformLog, Priority};
    use std::io;
    use std::os::unix::net::UnixDatagram;
    use std::path::PathBuf;
    use std::sync::OnceLock;

    const LOG_ID_MAIN: u8 = 0;
    /// Largest payload logd accepts (priority byte, tag, message and their terminators).
    pub const MAX_PAYLOAD: usize = 4068;

    #[derive(Debug)]
    pub struct Logd {
        path: PathBuf,
        tag: String,
        socket: OnceLock<Option<UnixDatagram>>,
    }

    impl Default for Logd {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Logd {
        #[must_use]
        pub fn new() -> Self {
            let tag = std::env::current_exe()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .unwrap_or_else(|| "lightlog".to_string());
            Self {
                path: PathBuf::from("/dev/socket/logdw"),
                tag,
                socket: OnceLock::new(),
            }
        }

        #[must_use]
        pub fn socket_path(mut self, path: impl Into<PathBuf>) -> Self {
            self.path = path.into();
            self
        }

        /// Used when a record carries no tag.
        #[must_use]
        pub fn tag(mut self, tag: impl Into<String>) -> Self {
            self.tag = tag.into();
            self
        }

        /// Header `id:u8 tid:u16 sec:u32 nsec:u32` (little endian, packed), then
        /// `priority:u8 tag\0 message\0`. Over-long messages are cut at a char boundary.
        #[must_use]
        pub fn frame(&self, priority: Priority, tag: Option<&str>, text: &str) -> Vec<u8> {
            let now = chrono::Utc::now();
            let sec = u32::try_from(now.timestamp()).unwrap_or(0);
            let nsec = now.timestamp_subsec_nanos();
            let tid = u16::try_from(std::process::id() & 0xffff).unwrap_or(0);

            let tag = tag.filter(|t| !t.is_empty()).unwrap_or(&self.tag);
            let room = MAX_PAYLOAD.saturating_sub(tag.len() + 3);
            let mut end = text.len().min(room);
            while !text.is_char_boundary(end) {
                end -= 1;
            }

            let mut frame = Vec::with_capacity(11 + 3 + tag.len() + end);
            frame.push(LOG_ID_MAIN);
            frame.extend_from_slice(&tid.to_le_bytes());
            frame.extend_from_slice(&sec.to_le_bytes());
            frame.extend_from_slice(&nsec.to_le_bytes());
            frame.push(priority.android_priority());
            frame.extend_from_slice(tag.as_bytes());
            frame.push(0);
            frame.extend_from_slice(&text.as_bytes()[..end]);
            frame.push(0);
            frame
        }

        fn connect(&self) -> Option<&UnixDatagram> {
            self.socket
                .get_or_init(|| {
                    let socket = UnixDatagram::unbound().ok()?;
                    socket.connect(&self.path).ok()?;
                    Some(socket)
                })
                .as_ref()
        }
    }

    impl PlatformLog for Logd {
        fn log(&self, priority: Priority, tag: Option<&str>, text: &str) -> io::Result<()> {
            let socket = self
                .connect()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "no logd socket"))?;
            socket.send(&self.frame(priority, tag, text))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_mapping() {
        assert_eq!(Priority::from(Level::Critical), Priority::Fatal);
        assert_eq!(Priority::from(Level::Verbose), Priority::Verbose);
        assert_eq!(Priority::from(Level::None), Priority::Info);
        assert_eq!(Priority::Warn.syslog_severity(), 4);
    }

    #[cfg(unix)]
    #[test]
    fn syslog_frame_carries_priority_and_tag() {
        let syslog = Syslog::new().ident("app");
        let frame = syslog.frame(Priority::Error, Some("NET"), "down");
        assert!(frame.starts_with("<11>"));
        assert!(frame.contains(" NET["));
        assert!(frame.ends_with("]: down"));

        let untagged = syslog.frame(Priority::Info, None, "x");
        assert!(untagged.contains(" app["));
    }

    #[cfg(unix)]
    #[test]
    fn logd_frame_layout() {
        let logd = Logd::new().tag("app");
        let frame = logd.frame(Priority::Warn, Some("NET"), "slow");
        assert_eq!(frame[0], 0);
        assert_eq!(frame[11], 5);
        assert_eq!(&frame[12..], b"NET\0slow\0");

        let untagged = logd.frame(Priority::Verbose, None, "x");
        assert_eq!(&untagged[11..], b"\x02app\0x\0");
    }

    #[cfg(unix)]
    #[test]
    fn logd_truncates_to_max_payload() {
        let logd = Logd::new();
        let text = "é".repeat(logd::MAX_PAYLOAD);
        let frame = logd.frame(Priority::Info, Some("T"), &text);
        let payload = frame.len() - 11;
        assert!(payload <= logd::MAX_PAYLOAD);
        assert_eq!(frame.last(), Some(&0));
        assert!(std::str::from_utf8(&frame[14..frame.len() - 1]).is_ok());
    }
}
