//! Lock-free, single-writer shared-memory telemetry channel.
//!
//! A fixed-layout POSIX shared-memory region published under
//! `<shm_root>/poker_telemetry_<job_id>`, subdivided into a 64-byte progress
//! block and a results block holding up to [`MAX_HANDS`] partial results.
//! Every multi-field update follows the sequence-lock discipline described
//! in the module-level docs of [`Telemetry`]: bump the block's sequence
//! counter to odd before mutating, then back to even once the mutation is
//! complete. A reader that observes two matching even reads of the sequence
//! counter around a copy of the fields has a consistent snapshot; this
//! crate is the writer, never the reader, so it only needs to hold up its
//! half of that contract.
//!
//! The region is created with `O_CREAT | O_RDWR | O_EXCL` at `0o600` and is
//! never unlinked by this process — the external reader owns removal once
//! the job reaches a terminal status.

use std::{ffi::CString, io, mem::size_of, ptr};

use crate::equity::result::EquityResult;

/// Maximum number of distinct hand names a single telemetry region can hold
/// partial results for — matches the 13x13 starting-hand grid.
pub const MAX_HANDS: usize = super::label::MAX_STARTING_HAND_LABELS;

/// `0` = running, `1` = completed, `2` = failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum JobStatus {
    /// The job is still running.
    Running = 0,
    /// The job finished successfully.
    Completed = 1,
    /// The job ended in error or was cancelled.
    Failed = 2,
}

/// The 64-byte progress block, sequence-locked.
#[repr(C)]
struct ProgressBlock {
    seq: u32,
    _pad: u32,
    job_start_ns: u64,
    hands_processed: u64,
    last_update_ns: u64,
    status: u8,
    _reserved: [u8; 31],
}

const _: () = assert!(size_of::<ProgressBlock>() == 64);

/// One 448-byte partial-result record.
#[repr(C)]
struct HandEquityRecord {
    equity: f64,
    wins: u32,
    ties: u32,
    losses: u32,
    simulations: u32,
    win_method_matrix: [[u32; 10]; 10],
    _padding: [u32; 6],
}

const _: () = assert!(size_of::<HandEquityRecord>() == 448);

/// The results block: a sequence number, a count, and `MAX_HANDS` fixed-size
/// `(name, record)` slots.
#[repr(C)]
struct ResultsBlock {
    seq: u32,
    results_count: u32,
    hand_names: [[u8; 8]; MAX_HANDS],
    results: [HandEquityRecord; MAX_HANDS],
}

/// The complete shared-memory layout: progress block followed by results
/// block.
#[repr(C)]
struct CompleteRegion {
    progress: ProgressBlock,
    results: ResultsBlock,
}

/// A handle to the memory-mapped telemetry region. Created once per job by
/// the orchestrator; dropped (unmapped, fd closed) when the job finishes —
/// but the shared-memory object itself is left behind for the reader.
pub struct Telemetry {
    ptr: *mut CompleteRegion,
    path: CString,
}

// SAFETY: `Telemetry` exposes only sequence-locked writes through `&self`
// methods on `*mut CompleteRegion`; the engine guarantees at most one
// `Telemetry` per region is ever writing.
unsafe impl Send for Telemetry {}
unsafe impl Sync for Telemetry {}

impl Telemetry {
    /// Create a new telemetry region at `<shm_root>/poker_telemetry_<job_id>`.
    ///
    /// Fails with an [`io::Error`] if the region already exists, permissions
    /// are insufficient, or `shm_root` is not writable. The caller (the
    /// range orchestrator) treats this as non-fatal: log at `warn` and
    /// proceed without telemetry, per [`crate::equity::error::EngineError::TelemetryUnavailable`].
    pub fn create(shm_root: &str, job_id: &str) -> io::Result<Self> {
        let path_string = format!("{shm_root}/poker_telemetry_{job_id}");
        let path = CString::new(path_string).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let size = size_of::<CompleteRegion>();

        // SAFETY: `path` is a valid, NUL-terminated C string; all other
        // arguments are plain integers. We check the return value below.
        let fd = unsafe {
            libc::open(
                path.as_ptr(),
                libc::O_CREAT | libc::O_RDWR | libc::O_EXCL,
                0o600,
            )
        };
        if fd < 0 {
            return Err(io::Error::last_os_error());
        }

        // SAFETY: `fd` was just opened successfully above.
        let truncate_result = unsafe { libc::ftruncate(fd, size as libc::off_t) };
        if truncate_result < 0 {
            let err = io::Error::last_os_error();
            unsafe {
                libc::close(fd);
            }
            let _ = std::fs::remove_file(path.to_str().unwrap_or_default());
            return Err(err);
        }

        // SAFETY: `fd` refers to a regular file truncated to at least
        // `size` bytes; we request a read/write shared mapping of exactly
        // that size.
        let map = unsafe {
            libc::mmap(
                ptr::null_mut(),
                size,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                fd,
                0,
            )
        };
        // The fd is no longer needed once mapped.
        unsafe {
            libc::close(fd);
        }
        if map == libc::MAP_FAILED {
            let err = io::Error::last_os_error();
            let _ = std::fs::remove_file(path.to_str().unwrap_or_default());
            return Err(err);
        }

        let region = map.cast::<CompleteRegion>();
        // SAFETY: `region` points to a freshly-mapped, zeroed page of at
        // least `size_of::<CompleteRegion>()` bytes (anonymous-backed file
        // pages from `ftruncate` read as zero), so writing the initial
        // field values through it is well-defined.
        unsafe {
            (*region).progress.seq = 0;
            (*region).progress.job_start_ns = now_ns();
            (*region).progress.hands_processed = 0;
            (*region).progress.last_update_ns = (*region).progress.job_start_ns;
            (*region).progress.status = JobStatus::Running as u8;
            (*region).results.seq = 0;
            (*region).results.results_count = 0;
        }

        Ok(Self { ptr: region, path })
    }

    /// Bump `hands_processed` under the progress block's sequence lock.
    pub fn update_hands_processed(&self, count: u64) {
        // SAFETY: `self.ptr` is a valid mapping for the lifetime of `self`;
        // the sequence-lock bump-mutate-bump sequence is the only writer
        // discipline this process uses against the progress block.
        unsafe {
            let progress = std::ptr::addr_of_mut!((*self.ptr).progress);
            (*progress).seq = (*progress).seq.wrapping_add(1);
            (*progress).hands_processed = count;
            (*progress).last_update_ns = now_ns();
            (*progress).seq = (*progress).seq.wrapping_add(1);
        }
    }

    /// Set the terminal (or running) status under the progress block's
    /// sequence lock.
    pub fn set_status(&self, status: JobStatus) {
        // SAFETY: see `update_hands_processed`.
        unsafe {
            let progress = std::ptr::addr_of_mut!((*self.ptr).progress);
            (*progress).seq = (*progress).seq.wrapping_add(1);
            (*progress).status = status as u8;
            (*progress).seq = (*progress).seq.wrapping_add(1);
        }
    }

    /// Publish a snapshot of per-hand equity results under the results
    /// block's sequence lock. Truncates to [`MAX_HANDS`] entries, matching
    /// the fixed-size layout.
    pub fn publish_results<'a>(&self, results: impl Iterator<Item = (&'a str, &'a EquityResult)>) {
        // SAFETY: see `update_hands_processed`; writes stay within the
        // fixed-size `hand_names`/`results` arrays via `.take(MAX_HANDS)`.
        unsafe {
            let block = std::ptr::addr_of_mut!((*self.ptr).results);
            (*block).seq = (*block).seq.wrapping_add(1);

            let mut count = 0u32;
            for (idx, (name, result)) in results.take(MAX_HANDS).enumerate() {
                let mut name_bytes = [0u8; 8];
                let src = name.as_bytes();
                let n = src.len().min(7);
                name_bytes[..n].copy_from_slice(&src[..n]);
                (*block).hand_names[idx] = name_bytes;

                let record = HandEquityRecord {
                    equity: result.equity(),
                    wins: result.wins,
                    ties: result.ties,
                    losses: result.losses,
                    simulations: result.total_simulations,
                    win_method_matrix: result.win_method_matrix,
                    _padding: [0; 6],
                };
                (*block).results[idx] = record;
                count += 1;
            }
            (*block).results_count = count;

            (*block).seq = (*block).seq.wrapping_add(1);
        }
    }

    /// The path this region was created at, for logging.
    pub fn path(&self) -> &str { self.path.to_str().unwrap_or_default() }
}

/// A consistent snapshot of the progress block, as a separate reader process
/// would observe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Trials completed so far across the whole job.
    pub hands_processed: u64,
    /// `0` = running, `1` = completed, `2` = failed.
    pub status: u8,
}

/// Read a consistent snapshot of the progress block at `path`, following the
/// reader half of the sequence-lock discipline: read `seq`, reject odd
/// values (a write is in progress), copy the fields, read `seq` again, and
/// accept only if it's unchanged. Retries up to `max_attempts` times before
/// giving up. This is reference reader code for an external process reading
/// the region the engine publishes — the engine itself never calls this.
pub fn read_progress(path: &str, max_attempts: u32) -> io::Result<ProgressSnapshot> {
    let c_path = CString::new(path).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let size = size_of::<CompleteRegion>();

    // SAFETY: opening for read-only access; failure is reported via `fd < 0`.
    let fd = unsafe { libc::open(c_path.as_ptr(), libc::O_RDONLY) };
    if fd < 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: `fd` is open for reading; we request a read-only mapping of
    // exactly the region's known size.
    let map = unsafe { libc::mmap(ptr::null_mut(), size, libc::PROT_READ, libc::MAP_SHARED, fd, 0) };
    unsafe {
        libc::close(fd);
    }
    if map == libc::MAP_FAILED {
        return Err(io::Error::last_os_error());
    }
    let region = map.cast::<CompleteRegion>();

    let result = (0..max_attempts.max(1)).find_map(|_| {
        // SAFETY: `region` is a valid mapping of `CompleteRegion`'s layout
        // for the duration of this function; fields are read, never
        // written, by this reader.
        unsafe {
            let progress = ptr::addr_of!((*region).progress);
            let seq0 = ptr::addr_of!((*progress).seq).read_volatile();
            if seq0 % 2 != 0 {
                return None;
            }
            let hands_processed = ptr::addr_of!((*progress).hands_processed).read_volatile();
            let status = ptr::addr_of!((*progress).status).read_volatile();
            let seq1 = ptr::addr_of!((*progress).seq).read_volatile();
            (seq0 == seq1).then_some(ProgressSnapshot {
                hands_processed,
                status,
            })
        }
    });

    // SAFETY: unmapping the same region and size just mapped above.
    unsafe {
        libc::munmap(map, size);
    }

    result.ok_or_else(|| io::Error::new(io::ErrorKind::WouldBlock, "no consistent snapshot observed"))
}

impl Drop for Telemetry {
    fn drop(&mut self) {
        // SAFETY: `self.ptr` was returned by a successful `mmap` of exactly
        // `size_of::<CompleteRegion>()` bytes in `create`. The backing
        // shared-memory object is intentionally left behind for the reader.
        unsafe {
            libc::munmap(self.ptr.cast(), size_of::<CompleteRegion>());
        }
    }
}

fn now_ns() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_shm_root() -> String {
        // `/dev/shm` isn't guaranteed writable/present in sandboxes without
        // tmpfs; a scratch directory under `std::env::temp_dir()` exercises
        // the exact same create/mmap/sequence-lock path without that
        // dependency.
        std::env::temp_dir().to_string_lossy().into_owned()
    }

    #[test]
    fn create_and_update_round_trips() {
        let root = temp_shm_root();
        let job_id = format!("test-{}", std::process::id());
        let telemetry = Telemetry::create(&root, &job_id).expect("create telemetry region");

        telemetry.update_hands_processed(3);
        telemetry.set_status(JobStatus::Completed);

        let mut result = EquityResult::new("AA");
        result.wins = 5;
        result.total_simulations = 10;
        telemetry.publish_results(std::iter::once(("AA", &result)));

        let path = telemetry.path().to_string();
        drop(telemetry);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn exclusive_create_rejects_existing_region() {
        let root = temp_shm_root();
        let job_id = format!("test-dup-{}", std::process::id());
        let first = Telemetry::create(&root, &job_id).expect("create telemetry region");
        let second = Telemetry::create(&root, &job_id);
        assert!(second.is_err());
        let path = first.path().to_string();
        drop(first);
        let _ = std::fs::remove_file(&path);
    }
}
