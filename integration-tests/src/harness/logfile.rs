use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A firewall log in its own temporary directory.
pub struct LogFile {
    _dir: TempDir,
    path: PathBuf,
}

impl LogFile {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, "").unwrap();
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, lines: &[String]) {
        let mut f = OpenOptions::new().append(true).open(&self.path).unwrap();
        for line in lines {
            writeln!(f, "{line}").unwrap();
        }
        f.flush().unwrap();
    }

    pub fn append_raw(&self, data: &str) {
        let mut f = OpenOptions::new().append(true).open(&self.path).unwrap();
        f.write_all(data.as_bytes()).unwrap();
    }

    /// Replaces the contents, as log rotation with copytruncate would.
    pub fn truncate_with(&self, lines: &[String]) {
        fs::write(&self.path, "").unwrap();
        self.append(lines);
    }
}

/// An iptables LOG line as the kernel writes it to syslog.
pub fn packet_line(src: &str, dst: &str, len: u64) -> String {
    format!(
        "Oct 16 10:12:01 gw kernel: [NETLOG] IN=eth1 OUT=ppp0 MAC=00:11:22:33:44:55 \
         SRC={src} DST={dst} LEN={len} TOS=0x00 PREC=0x00 TTL=63 ID=4242 DF PROTO=TCP \
         SPT=51234 DPT=443 WINDOW=502 RES=0x00 ACK URGP=0"
    )
}
