//! Program-derived addresses.
//!
//! A program-derived address is a hash of seeds and a program id that is
//! guaranteed to have no private key. On Solana that means the hash must not
//! decompress to an Ed25519 point. [`find_program_address`] searches bump
//! seeds from 255 downward until it finds such a hash, exactly as the runtime
//! does, so addresses computed here match on-chain expectations.

use curve25519_dalek::edwards::CompressedEdwardsY;
use sha2::{Digest, Sha256};

use crate::{Address, Error, Result};

/// Maximum number of seeds, bump included.
pub const MAX_SEEDS: usize = 16;

/// Maximum length of a single seed.
pub const MAX_SEED_LEN: usize = 32;

/// Suffix hashed after the program id.
pub const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// How a chain turns seeds into a candidate address and decides whether the
/// candidate is usable.
pub trait AddressScheme {
    /// Hash `seeds` (bump already appended by the caller) under `program_id`.
    fn hash_candidate(&self, seeds: &[&[u8]], program_id: &Address) -> [u8; 32];

    /// Whether `candidate` may serve as a program address.
    fn is_valid(&self, candidate: &[u8; 32]) -> bool;

    fn max_seeds(&self) -> usize {
        MAX_SEEDS
    }

    fn max_seed_len(&self) -> usize {
        MAX_SEED_LEN
    }
}

/// The Solana runtime's derivation: SHA-256 and an off-curve check.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solana;

impl AddressScheme for Solana {
    fn hash_candidate(&self, seeds: &[&[u8]], program_id: &Address) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for seed in seeds {
            hasher.update(seed);
        }
        hasher.update(program_id);
        hasher.update(PDA_MARKER);
        hasher.finalize().into()
    }

    fn is_valid(&self, candidate: &[u8; 32]) -> bool {
        !is_on_curve(candidate)
    }
}

/// Whether `bytes` decompress to a point on the Ed25519 curve.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}

fn check_seeds<S: AddressScheme>(scheme: &S, seeds: &[&[u8]]) -> Result<()> {
    if seeds.len() > scheme.max_seeds() {
        return Err(Error::MaxSeedsExceeded(seeds.len()));
    }
    match seeds.iter().find(|seed| seed.len() > scheme.max_seed_len()) {
        Some(seed) => Err(Error::MaxSeedLengthExceeded(seed.len())),
        None => Ok(()),
    }
}

/// Derive the address for an exact seed list (bump included, if any).
pub fn create_program_address_with<S: AddressScheme>(
    scheme: &S,
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<Address> {
    check_seeds(scheme, seeds)?;
    let candidate = scheme.hash_candidate(seeds, program_id);
    if !scheme.is_valid(&candidate) {
        return Err(Error::InvalidSeeds);
    }
    Ok(Address(candidate))
}

/// Find the canonical address and bump for `seeds`.
///
/// Tries bumps 255 down to 1, one hash each, and stops at the first valid
/// candidate. Bump 0 is never tried, matching the runtime, so the search is
/// bounded at 255 candidates.
pub fn find_program_address_with<S: AddressScheme>(
    scheme: &S,
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<(Address, u8)> {
    // Room for the bump.
    check_seeds(scheme, seeds)?;
    if seeds.len() + 1 > scheme.max_seeds() {
        return Err(Error::MaxSeedsExceeded(seeds.len() + 1));
    }

    for bump in (1..=u8::MAX).rev() {
        let bump_seed = [bump];
        let mut candidate_seeds = seeds.to_vec();
        candidate_seeds.push(&bump_seed);

        let candidate = scheme.hash_candidate(&candidate_seeds, program_id);
        if scheme.is_valid(&candidate) {
            return Ok((Address(candidate), bump));
        }
    }
    Err(Error::NoValidAddress)
}

/// [`create_program_address_with`] using the [`Solana`] scheme.
pub fn create_program_address(seeds: &[&[u8]], program_id: &Address) -> Result<Address> {
    create_program_address_with(&Solana, seeds, program_id)
}

/// [`find_program_address_with`] using the [`Solana`] scheme.
pub fn find_program_address(seeds: &[&[u8]], program_id: &Address) -> Result<(Address, u8)> {
    find_program_address_with(&Solana, seeds, program_id)
}
