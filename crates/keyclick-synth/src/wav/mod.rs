//! 16-bit mono PCM WAV writer.
//!
//! Files carry only the canonical 44-byte RIFF header followed by the
//! sample data: no timestamps or metadata chunks, so a seeded render always
//! produces the same bytes. The BLAKE3 hash of the PCM payload identifies a
//! render independent of its container.

mod builder;
mod format;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use builder::WavWriter;
pub use format::{WavFormat, WAV_HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{sample_to_pcm16, samples_to_pcm16, write_wav, write_wav_file, write_wav_to_vec};
