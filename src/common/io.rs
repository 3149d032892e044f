use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::Path;

#[cfg(target_os = "linux")]
use std::sync::atomic::{AtomicBool, Ordering};

use memmap2::{Mmap, MmapOptions};

/// Loaded input: either a read-only mapping or an owned buffer.
/// Dereferences to `&[u8]` so scanners never care which one they got.
pub enum FileData {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Deref for FileData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            FileData::Mmap(m) => m,
            FileData::Owned(v) => v,
        }
    }
}

/// Files smaller than this are read into a Vec; mapping setup and teardown
/// cost more than the copy for them.
pub const MMAP_THRESHOLD: u64 = 1024 * 1024;

#[cfg(target_os = "linux")]
static NOATIME_SUPPORTED: AtomicBool = AtomicBool::new(true);

/// Open with O_NOATIME where permitted. EPERM (not the file owner) disables
/// the flag for the rest of the process.
#[cfg(target_os = "linux")]
fn open_noatime(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    if NOATIME_SUPPORTED.load(Ordering::Relaxed) {
        match std::fs::OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NOATIME)
            .open(path)
        {
            Ok(f) => return Ok(f),
            Err(ref e) if e.raw_os_error() == Some(libc::EPERM) => {
                NOATIME_SUPPORTED.store(false, Ordering::Relaxed);
            }
            Err(e) => return Err(e),
        }
    }
    File::open(path)
}

#[cfg(not(target_os = "linux"))]
fn open_noatime(path: &Path) -> io::Result<File> {
    File::open(path)
}

/// Load the scan input named on the command line. `-` means standard input.
pub fn read_input(name: &str) -> io::Result<FileData> {
    if name == "-" {
        read_stdin().map(FileData::Owned)
    } else {
        read_file(Path::new(name))
    }
}

/// Read a file: exact-size read() below [`MMAP_THRESHOLD`], read-only mmap above.
/// Directories fail with the OS error from read(), like any other unreadable input.
pub fn read_file(path: &Path) -> io::Result<FileData> {
    let file = open_noatime(path)?;
    let metadata = file.metadata()?;
    let len = metadata.len();

    if !metadata.file_type().is_file() {
        // Pipes, character devices and friends report no useful length.
        let mut buf = Vec::new();
        let mut reader = file;
        reader.read_to_end(&mut buf)?;
        return Ok(FileData::Owned(buf));
    }
    if len == 0 {
        return Ok(FileData::Owned(Vec::new()));
    }

    if len < MMAP_THRESHOLD {
        let mut buf = vec![0u8; len as usize];
        let n = read_full(&mut &file, &mut buf)?;
        buf.truncate(n);
        return Ok(FileData::Owned(buf));
    }

    // SAFETY: read-only mapping; the buffer is never written through it.
    // A concurrent truncation by another process is outside our control,
    // same as for any mmap-based reader.
    match unsafe { MmapOptions::new().map(&file) } {
        Ok(mmap) => {
            #[cfg(target_os = "linux")]
            {
                // HugePage must be advised before the first fault to take effect.
                if len >= 2 * 1024 * 1024 {
                    let _ = mmap.advise(memmap2::Advice::HugePage);
                }
                let _ = mmap.advise(memmap2::Advice::Sequential);
                let _ = mmap.advise(memmap2::Advice::WillNeed);
            }
            log::debug!("mapped {} ({} bytes)", path.display(), len);
            Ok(FileData::Mmap(mmap))
        }
        Err(e) => {
            log::debug!("mmap of {} failed ({}), reading instead", path.display(), e);
            let mut buf = vec![0u8; len as usize];
            let n = read_full(&mut &file, &mut buf)?;
            buf.truncate(n);
            Ok(FileData::Owned(buf))
        }
    }
}

/// Read all of standard input into a Vec.
pub fn read_stdin() -> io::Result<Vec<u8>> {
    const PREALLOC: usize = 1024 * 1024;

    let mut buf: Vec<u8> = Vec::with_capacity(PREALLOC);
    io::stdin().lock().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Fill `buf` from `reader`, retrying short reads until full or EOF.
/// Returns the number of bytes actually read.
#[inline]
fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let n = reader.read(buf)?;
    if n == buf.len() || n == 0 {
        return Ok(n);
    }
    let mut total = n;
    while total < buf.len() {
        match reader.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}
