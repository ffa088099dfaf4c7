//! Wire codec for [`BigFloat`] values.
//!
//! A value crosses the wire as five messages, in order: mantissa
//! precision (u64), signed limb count (i64, the value's sign rides on the
//! count), base-2 exponent (i64), declared payload length in bytes (u64),
//! then the raw mantissa payload: little-endian magnitude bytes padded
//! to whole 8-byte limbs. All integers are little-endian. The receiver
//! probes the payload frame and refuses a length that disagrees with the
//! declaration; that is the one place a variable-size payload crosses the
//! wire, and a wrong prefix would otherwise corrupt the value silently.

use num_bigint::{BigInt, BigUint, Sign};

use crate::bigfloat::BigFloat;
use crate::comm::Communicator;
use crate::constants::LIMB_BYTES;
use crate::error::EulerError;

/// Malformed value frames.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A fixed-width header frame had the wrong length.
    #[error("header frame {index} has {got} bytes, expected 8")]
    BadHeader {
        /// Position of the frame in the sequence (0-based).
        index: usize,
        /// Received length.
        got: usize,
    },

    /// The payload frame disagrees with the declared length.
    #[error("payload length mismatch: declared {declared}, received {received}")]
    LengthMismatch {
        /// Length announced in the fourth header frame.
        declared: u64,
        /// Length of the payload frame actually pending.
        received: u64,
    },

    /// The payload is not a whole number of limbs, or the limb count
    /// disagrees with the payload size.
    #[error("payload of {bytes} bytes does not hold {limbs} limbs")]
    LimbMismatch {
        /// Payload size in bytes.
        bytes: u64,
        /// Absolute limb count from the second header frame.
        limbs: u64,
    },
}

/// Encode a value into its five wire frames.
#[must_use]
pub fn encode(value: &BigFloat) -> Vec<Vec<u8>> {
    let (sign, mut payload) = value.mantissa_bytes_le();

    // Pad the magnitude up to a whole number of limbs.
    let limbs = payload.len().div_ceil(LIMB_BYTES);
    payload.resize(limbs * LIMB_BYTES, 0);

    #[allow(clippy::cast_possible_wrap)]
    let signed_limbs = match sign {
        Sign::Minus => -(limbs as i64),
        _ => limbs as i64,
    };

    vec![
        value.precision().to_le_bytes().to_vec(),
        signed_limbs.to_le_bytes().to_vec(),
        value.exponent().to_le_bytes().to_vec(),
        (payload.len() as u64).to_le_bytes().to_vec(),
        payload,
    ]
}

/// Decode the header fields plus payload back into a value.
pub fn decode(
    precision: u64,
    signed_limbs: i64,
    exponent: i64,
    payload: &[u8],
) -> Result<BigFloat, WireError> {
    let limbs = signed_limbs.unsigned_abs();
    let expected = limbs.checked_mul(LIMB_BYTES as u64);
    if expected != Some(payload.len() as u64) {
        return Err(WireError::LimbMismatch {
            bytes: payload.len() as u64,
            limbs,
        });
    }

    let magnitude = BigUint::from_bytes_le(payload);
    let sign = if signed_limbs < 0 {
        Sign::Minus
    } else {
        Sign::Plus
    };
    let mantissa = BigInt::from_biguint(sign, magnitude);
    Ok(BigFloat::from_parts(precision, mantissa, exponent))
}

/// Send a value to `dest` as its frame sequence.
pub fn send_value(
    comm: &mut dyn Communicator,
    dest: usize,
    value: &BigFloat,
) -> Result<(), EulerError> {
    for frame in encode(value) {
        comm.send(dest, frame)?;
    }
    Ok(())
}

/// Receive a value from `src`, validating the declared payload length
/// against the probed frame before consuming it.
pub fn recv_value(comm: &mut dyn Communicator, src: usize) -> Result<BigFloat, EulerError> {
    let precision = recv_header(comm, src, 0)?;
    #[allow(clippy::cast_possible_wrap)]
    let signed_limbs = recv_header(comm, src, 1)? as i64;
    #[allow(clippy::cast_possible_wrap)]
    let exponent = recv_header(comm, src, 2)? as i64;
    let declared = recv_header(comm, src, 3)?;

    let pending = comm.probe(src)? as u64;
    if pending != declared {
        return Err(WireError::LengthMismatch {
            declared,
            received: pending,
        }
        .into());
    }

    let payload = comm.recv(src)?;
    Ok(decode(precision, signed_limbs, exponent, &payload)?)
}

fn recv_header(
    comm: &mut dyn Communicator,
    src: usize,
    index: usize,
) -> Result<u64, EulerError> {
    let frame = comm.recv(src)?;
    let bytes: [u8; 8] = frame
        .as_slice()
        .try_into()
        .map_err(|_| WireError::BadHeader {
            index,
            got: frame.len(),
        })?;
    Ok(u64::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comm::ChannelComm;

    fn sample(num: u64, den: u64) -> BigFloat {
        BigFloat::from_ratio(&BigUint::from(num), &BigUint::from(den), 128).unwrap()
    }

    #[allow(clippy::cast_possible_wrap)]
    fn frames_to_value(frames: Vec<Vec<u8>>) -> Result<BigFloat, WireError> {
        let header = |i: usize| u64::from_le_bytes(frames[i].as_slice().try_into().unwrap());
        decode(header(0), header(1) as i64, header(2) as i64, &frames[4])
    }

    #[test]
    fn encode_produces_five_frames() {
        let frames = encode(&sample(22, 7));
        assert_eq!(frames.len(), 5);
        for frame in &frames[..4] {
            assert_eq!(frame.len(), 8);
        }
        assert_eq!(frames[4].len() % LIMB_BYTES, 0);
    }

    #[test]
    fn round_trip_preserves_everything() {
        for (num, den) in [(1u64, 3u64), (22, 7), (1_000_000, 7919), (5, 2)] {
            let value = sample(num, den);
            let back = frames_to_value(encode(&value)).unwrap();
            assert_eq!(back, value, "{num}/{den}");
        }
    }

    #[test]
    fn round_trip_zero() {
        let zero = BigFloat::zero(96);
        let back = frames_to_value(encode(&zero)).unwrap();
        assert_eq!(back, zero);
    }

    #[test]
    fn round_trip_negative() {
        let value = BigFloat::from_parts(64, BigInt::from(-12345), -20);
        let frames = encode(&value);
        let signed_limbs = i64::from_le_bytes(frames[1].as_slice().try_into().unwrap());
        assert!(signed_limbs < 0);
        let back = frames_to_value(frames).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn decode_rejects_limb_mismatch() {
        let err = decode(64, 2, 0, &[0u8; 8]).unwrap_err();
        assert!(matches!(err, WireError::LimbMismatch { .. }));
    }

    #[test]
    fn recv_rejects_length_mismatch() {
        let mut mesh = ChannelComm::mesh(2);
        let mut receiver = mesh.pop().unwrap();
        let mut sender = mesh.pop().unwrap();

        let mut frames = encode(&sample(355, 113));
        // Lie about the payload length.
        frames[3] = 9999u64.to_le_bytes().to_vec();
        for frame in frames {
            sender.send(1, frame).unwrap();
        }

        let err = recv_value(&mut receiver, 0).unwrap_err();
        assert!(matches!(
            err,
            EulerError::Wire(WireError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn send_and_recv_across_channel() {
        let mut mesh = ChannelComm::mesh(2);
        let mut receiver = mesh.pop().unwrap();
        let mut sender = mesh.pop().unwrap();

        let value = sample(271_828, 100_000).add(&BigFloat::from_u64(1, 128));
        send_value(&mut sender, 1, &value).unwrap();
        let back = recv_value(&mut receiver, 0).unwrap();
        assert_eq!(back, value);
    }
}
