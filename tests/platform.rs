use lightlog::output::{PlatformLog, Priority};
use lightlog::{Level, Logger};
use std::io;
use std::sync::{Arc, Mutex};

type Sent = Arc<Mutex<Vec<(Priority, Option<String>, String)>>>;

#[derive(Clone, Default)]
struct FakeChannel(Sent);

impl PlatformLog for FakeChannel {
    fn log(&self, priority: Priority, tag: Option<&str>, text: &str) -> io::Result<()> {
        self.0
            .lock()
            .unwrap()
            .push((priority, tag.map(str::to_string), text.to_string()));
        Ok(())
    }
}

struct BrokenChannel;

impl PlatformLog for BrokenChannel {
    fn log(&self, _: Priority, _: Option<&str>, _: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
    }
}

#[test]
fn system_log_passes_body_tag_and_priority() {
    let channel = FakeChannel::default();
    let log = Logger::builder().system_log(channel.clone()).build();

    assert!(!log.error_t("NET", format_args!("Disk {}", "full")));
    assert!(log.verbose("detail"));

    let sent = channel.0.lock().unwrap();
    assert_eq!(
        sent[0],
        (Priority::Error, Some("NET".to_string()), "Disk full".to_string())
    );
    assert_eq!(sent[1], (Priority::Verbose, None, "detail".to_string()));
}

#[test]
fn debug_channel_gets_the_decorated_line() {
    let channel = FakeChannel::default();
    let log = Logger::builder()
        .level(Level::Info)
        .debug_channel(channel.clone())
        .build();

    log.warn_t("UI", "slow frame");
    log.debug("filtered");

    let sent = channel.0.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let (priority, tag, text) = &sent[0];
    assert_eq!(*priority, Priority::Warn);
    assert_eq!(*tag, None);
    assert!(text.starts_with("[UI]: "));
    assert!(text.ends_with("WARN:\t slow frame\n"));
}

#[test]
fn channel_failures_never_reach_the_caller() {
    let log = Logger::builder().system_log(BrokenChannel).build();
    assert!(!log.critical("lost"));
    assert!(log.info("lost"));
}

#[test]
fn last_backend_wins() {
    let first = FakeChannel::default();
    let second = FakeChannel::default();
    let log = Logger::builder()
        .system_log(first.clone())
        .debug_channel(second.clone())
        .build();

    log.info("once");

    assert!(first.0.lock().unwrap().is_empty());
    assert_eq!(second.0.lock().unwrap().len(), 1);
}

#[cfg(unix)]
#[test]
fn syslog_over_datagram_socket() {
    use lightlog::output::Syslog;
    use std::os::unix::net::UnixDatagram;

    let tmp_dir = tempfile::TempDir::new().unwrap();
    let socket_path = tmp_dir.path().join("log.sock");
    let server = UnixDatagram::bind(&socket_path).unwrap();

    let log = Logger::builder()
        .system_log(Syslog::new().socket_path(&socket_path).ident("svc"))
        .build();
    log.error_t("NET", "down");
    log.info("up");

    let mut buf = [0u8; 512];
    let n = server.recv(&mut buf).unwrap();
    let frame = std::str::from_utf8(&buf[..n]).unwrap();
    assert!(frame.starts_with("<11>"));
    assert!(frame.contains(" NET["));
    assert!(frame.ends_with("]: down"));

    let n = server.recv(&mut buf).unwrap();
    let frame = std::str::from_utf8(&buf[..n]).unwrap();
    assert!(frame.starts_with("<14>"));
    assert!(frame.contains(" svc["));
}

#[cfg(unix)]
#[test]
fn logd_over_datagram_socket() {
    use lightlog::output::Logd;
    use std::os::unix::net::UnixDatagram;

    let tmp_dir = tempfile::TempDir::new().unwrap();
    let socket_path = tmp_dir.path().join("logdw");
    let server = UnixDatagram::bind(&socket_path).unwrap();

    let log = Logger::builder()
        .system_log(Logd::new().socket_path(&socket_path).tag("svc"))
        .build();
    log.error_t("NET", "down");
    log.debug("detail");

    let mut buf = [0u8; 512];
    let n = server.recv(&mut buf).unwrap();
    assert_eq!(buf[0], 0);
    assert_eq!(&buf[11..n], b"\x06NET\0down\0");

    let n = server.recv(&mut buf).unwrap();
    assert_eq!(&buf[11..n], b"\x03svc\0detail\0");
}
