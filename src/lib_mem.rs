#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

pub const CHUNK_FLOOR_BYTES: u64 = 8;
pub const INITIAL_CHUNK_BYTES: u64 = 1024;

/// Paces a worker's allocations so the target footprint is reached roughly
/// by the deadline. Chunks are held for the life of the pacer and never read
/// back.
#[derive(Debug)]
pub struct ChunkPacer {
    bytes_remaining: u64,
    chunk_size: u64,
    allocated: u64,
    held: Vec<Vec<u8>>,
}

impl ChunkPacer {
    pub fn new(target_bytes: u64) -> Self {
        Self {
            bytes_remaining: target_bytes,
            chunk_size: INITIAL_CHUNK_BYTES,
            allocated: 0,
            held: Vec::new(),
        }
    }

    pub fn grab(&mut self) -> u64 {
        // clamp so the total never exceeds the target
        let take = self.chunk_size.min(self.bytes_remaining);
        if take == 0 {
            return 0;
        }
        self.held.push(vec![0_u8; take as usize]);
        self.bytes_remaining -= take;
        self.allocated += take;
        take
    }

    pub fn repace(&mut self, elapsed_us: i64, time_left_us: i64) {
        // no re-estimate until a cycle has actually been measured
        if elapsed_us <= 0 {
            return;
        }
        // spread the remaining bytes over the expected remaining cycles
        let cycles_left = (time_left_us / elapsed_us).max(1) as u64;
        self.chunk_size = (self.bytes_remaining / cycles_left).max(CHUNK_FLOOR_BYTES);
    }

    pub fn allocated_bytes(&self) -> u64 {
        self.allocated
    }

    pub fn bytes_remaining(&self) -> u64 {
        self.bytes_remaining
    }

    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }
}
