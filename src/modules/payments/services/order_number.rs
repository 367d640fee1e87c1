use chrono::Utc;
use rand::Rng;

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Generates local order numbers: `{prefix}{unix_millis}_{9 base-36 chars}`.
///
/// Uniqueness rests on the timestamp plus random suffix; there is no
/// collision check.
#[derive(Debug, Clone)]
pub struct OrderNumberGenerator {
    prefix: String,
}

impl OrderNumberGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn generate(&self) -> String {
        let millis = Utc::now().timestamp_millis();
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect();

        format!("{}{}_{}", self.prefix, millis, suffix)
    }

    /// Whether `candidate` looks like something `generate` produced
    pub fn matches_format(&self, candidate: &str) -> bool {
        let Some(rest) = candidate.strip_prefix(&self.prefix) else {
            return false;
        };
        let Some((millis, suffix)) = rest.split_once('_') else {
            return false;
        };

        !millis.is_empty()
            && millis.bytes().all(|b| b.is_ascii_digit())
            && suffix.len() == SUFFIX_LEN
            && suffix.bytes().all(|b| SUFFIX_ALPHABET.contains(&b))
    }
}

impl Default for OrderNumberGenerator {
    fn default() -> Self {
        Self::new("order_")
    }
}
