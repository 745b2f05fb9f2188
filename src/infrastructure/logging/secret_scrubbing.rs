use regex::{Captures, Regex};
use std::io;
use std::sync::LazyLock;
use tracing_subscriber::fmt::MakeWriter;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("valid escape pattern"));

static GOOGLE_API_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AIza[0-9A-Za-z_\-]{35}").expect("valid google key pattern"));

static HEX_PRIVATE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:0x)?[0-9a-fA-F]{64}\b").expect("valid private key pattern")
});

static BEARER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.]+").expect("valid bearer pattern"));

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(["']?(?:[a-z_]*api_key|apikey|private_key|secret|token|password)["']?\s*[:=]\s*)["']?[^"'\s,}]+["']?"#,
    )
    .expect("valid assignment pattern")
});

/// Masks secrets in free-form text before it reaches a log sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    /// Create a new scrubber
    pub fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    ///
    /// Terminal escape sequences are removed first: colored output splits a
    /// `key=value` field with escape codes that would hide it from matching.
    pub fn scrub_message(&self, message: &str) -> String {
        let plain = ANSI_ESCAPE.replace_all(message, "");
        let scrubbed = GOOGLE_API_KEY.replace_all(&plain, "[API_KEY_REDACTED]");
        let scrubbed = HEX_PRIVATE_KEY.replace_all(&scrubbed, "[PRIVATE_KEY_REDACTED]");
        let scrubbed = BEARER.replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]");
        let scrubbed = ASSIGNMENT.replace_all(&scrubbed, |caps: &Captures| {
            format!("{}[REDACTED]", &caps[1])
        });
        scrubbed.into_owned()
    }
}

/// `MakeWriter` adapter that scrubs every formatted log record.
#[derive(Debug, Clone)]
pub struct ScrubbingMakeWriter<M> {
    inner: M,
    scrubber: SecretScrubber,
}

impl<M> ScrubbingMakeWriter<M> {
    /// Wrap `inner` so that everything it writes is scrubbed
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            scrubber: SecretScrubber::new(),
        }
    }
}

impl<'a, M> MakeWriter<'a> for ScrubbingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = ScrubbingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        ScrubbingWriter {
            inner: self.inner.make_writer(),
            scrubber: self.scrubber,
        }
    }
}

/// Writer produced by [`ScrubbingMakeWriter`].
///
/// The fmt layer hands over one complete record per `write` call, so each
/// buffer is scrubbed as a unit.
#[derive(Debug)]
pub struct ScrubbingWriter<W> {
    inner: W,
    scrubber: SecretScrubber,
}

impl<W: io::Write> io::Write for ScrubbingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let scrubbed = self.scrubber.scrub_message(&text);
        self.inner.write_all(scrubbed.as_bytes())?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
