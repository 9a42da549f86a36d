use std::sync::atomic::{AtomicUsize, Ordering};

use crate::hash::HashFunction;

/// An HMAC test vector.
pub(crate) struct TestVector {
    pub(crate) key: Vec<u8>,
    pub(crate) data: Vec<u8>,
    /// Expected tag, possibly truncated.
    pub(crate) tag: Vec<u8>,
}

/// Inputs of the RFC 4231 test cases, which are shared by all hash functions.
fn rfc4231_input(case: usize) -> (Vec<u8>, Vec<u8>) {
    match case {
        1 => (vec![0x0b; 20], b"Hi There".to_vec()),
        2 => (b"Jefe".to_vec(), b"what do ya want for nothing?".to_vec()),
        3 => (vec![0xaa; 20], vec![0xdd; 50]),
        4 => ((0x01..=0x19).collect(), vec![0xcd; 50]),
        5 => (vec![0x0c; 20], b"Test With Truncation".to_vec()),
        6 => (
            vec![0xaa; 131],
            b"Test Using Larger Than Block-Size Key - Hash Key First".to_vec(),
        ),
        7 => (
            vec![0xaa; 131],
            b"This is a test using a larger than block-size key and a larger than block-size data. \
              The key needs to be hashed before being used by the HMAC algorithm."
                .to_vec(),
        ),
        _ => panic!("RFC 4231 has no test case {case}"),
    }
}

/// RFC 4231 test case for HMAC-SHA-256.
pub(crate) fn rfc4231_sha256(case: usize) -> TestVector {
    let tag = match case {
        1 => "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
        2 => "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
        3 => "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe",
        4 => "82558a389a443c0ea4cc819899f2083a85f0faa3e578f8077a2e3ff46729665b",
        5 => "a3b6167473100ee06e0c796c2955552b",
        6 => "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
        7 => "9b09ffa71b942fcb27635fbcd5b0e944bfdc63644f0713938a7f51535c3a35e2",
        _ => panic!("RFC 4231 has no test case {case}"),
    };

    vector(case, tag)
}

/// RFC 4231 test case for HMAC-SHA-512.
pub(crate) fn rfc4231_sha512(case: usize) -> TestVector {
    let tag = match case {
        1 => "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
              daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
        2 => "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
              9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
        3 => "fa73b0089d56a284efb0f0756c890be9b1b5dbdd8ee81a3655f83e33b2279d39\
              bf3e848279a722c806b485a47e67c807b946a337bee8942674278859e13292fb",
        4 => "b0ba465637458c6990e5a8c5f61d4af7e576d97ff94b872de76f8050361ee3db\
              a91ca5c11aa25eb4d679275cc5788063a5f19741120c4f2de2adebeb10a298dd",
        5 => "415fad6271580a531d4179bc891d87a6",
        6 => "80b24263c7c1a3ebb71493c1dd7be8b49b46d1f41b4aeec1121b013783f8f352\
              6b56d037e05f2598bd0fd2215d6a1e5295e64f73f63f0aec8b915a985d786598",
        7 => "e37b6a775dc87dbaa4dfa9f96e5e3ffddebd71f8867289865df5a32d20cdc944\
              b6022cac3c4982b10d5eeb55c3e4de15134676fb6de0446065c97440fa8c6a58",
        _ => panic!("RFC 4231 has no test case {case}"),
    };

    vector(case, tag)
}

fn vector(case: usize, tag: &str) -> TestVector {
    let (key, data) = rfc4231_input(case);

    TestVector {
        key,
        data,
        tag: hex::decode(tag).unwrap(),
    }
}

/// Wraps a hash function and counts how often it is invoked.
#[derive(Debug, Default)]
pub(crate) struct CountingHash<H> {
    inner: H,
    calls: AtomicUsize,
}

impl<H> CountingHash<H> {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<H: HashFunction> HashFunction for CountingHash<H> {
    const BLOCK_LEN: usize = H::BLOCK_LEN;
    const OUTPUT_LEN: usize = H::OUTPUT_LEN;

    type Error = H::Error;

    fn hash(&self, input: &[u8]) -> Result<Vec<u8>, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.hash(input)
    }
}

/// Wraps a hash function and fails on the `n`-th invocation, counting from 1.
#[derive(Debug)]
pub(crate) struct FailingCall<H> {
    inner: CountingHash<H>,
    fail_on: usize,
}

impl<H: Default> FailingCall<H> {
    pub(crate) fn new(fail_on: usize) -> Self {
        Self {
            inner: CountingHash::default(),
            fail_on,
        }
    }
}

impl<H> FailingCall<H> {
    pub(crate) fn calls(&self) -> usize {
        self.inner.calls()
    }
}

impl<H: HashFunction> HashFunction for FailingCall<H> {
    const BLOCK_LEN: usize = H::BLOCK_LEN;
    const OUTPUT_LEN: usize = H::OUTPUT_LEN;

    type Error = BackendError;

    fn hash(&self, input: &[u8]) -> Result<Vec<u8>, Self::Error> {
        let digest = self.inner.hash(input);
        if self.inner.calls() == self.fail_on {
            return Err(BackendError);
        }

        digest.map_err(|_| BackendError)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("hash backend unavailable")]
pub(crate) struct BackendError;

/// A hash function which always fails.
#[derive(Debug, Default)]
pub(crate) struct BrokenHash;

impl HashFunction for BrokenHash {
    const BLOCK_LEN: usize = 64;
    const OUTPUT_LEN: usize = 32;

    type Error = BackendError;

    fn hash(&self, _input: &[u8]) -> Result<Vec<u8>, Self::Error> {
        Err(BackendError)
    }
}

/// A hash function which returns fewer bytes than it advertises.
#[derive(Debug, Default)]
pub(crate) struct ShortHash;

impl HashFunction for ShortHash {
    const BLOCK_LEN: usize = 64;
    const OUTPUT_LEN: usize = 32;

    type Error = std::convert::Infallible;

    fn hash(&self, input: &[u8]) -> Result<Vec<u8>, Self::Error> {
        Ok(vec![input.len() as u8; 31])
    }
}

#[test]
fn test_rfc4231_inputs() {
    let TestVector { key, data, .. } = rfc4231_sha256(4);
    assert_eq!(key.len(), 25);
    assert_eq!(key[24], 0x19);
    assert_eq!(data.len(), 50);

    let TestVector { key, data, tag } = rfc4231_sha512(7);
    assert_eq!(key.len(), 131);
    assert_eq!(data.len(), 152);
    assert_eq!(tag.len(), 64);
}
