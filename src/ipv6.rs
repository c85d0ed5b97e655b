/// IPv6 address parsing and serialization
use crate::compat::{String, Vec};
use crate::error::{ParseError, Result, ValidationError};
use core::fmt::Write;

fn fail(errors: &mut Vec<ValidationError>, error: ValidationError) -> Result<[u16; 8]> {
    errors.push(error);
    Err(ParseError::InvalidIpv6)
}

/// Parse an IPv6 address (without the surrounding brackets) into 8 pieces.
///
/// Supports `::` compression and an embedded IPv4 address in the last 32 bits
/// (e.g. "`::ffff:192.168.1.1`"). Every syntax problem is fatal.
pub fn parse_ipv6(input: &str, errors: &mut Vec<ValidationError>) -> Result<[u16; 8]> {
    let input: Vec<char> = input.chars().collect();
    let at = |i: usize| input.get(i).copied();

    let mut address = [0u16; 8];
    let mut piece_index = 0;
    let mut compress: Option<usize> = None;
    let mut pointer = 0;

    if at(pointer) == Some(':') {
        if at(pointer + 1) != Some(':') {
            return fail(errors, ValidationError::Ipv6InvalidCompression);
        }
        pointer += 2;
        piece_index += 1;
        compress = Some(piece_index);
    }

    while let Some(c) = at(pointer) {
        if piece_index == 8 {
            return fail(errors, ValidationError::Ipv6TooManyPieces);
        }

        if c == ':' {
            if compress.is_some() {
                return fail(errors, ValidationError::Ipv6MultipleCompression);
            }
            pointer += 1;
            piece_index += 1;
            compress = Some(piece_index);
            continue;
        }

        let mut value: u16 = 0;
        let mut length = 0;
        while length < 4 {
            let Some(digit) = at(pointer).and_then(|c| c.to_digit(16)) else {
                break;
            };
            value = value * 0x10 + digit as u16;
            pointer += 1;
            length += 1;
        }

        match at(pointer) {
            Some('.') => {
                if length == 0 {
                    return fail(errors, ValidationError::Ipv4InIpv6InvalidCodePoint);
                }
                pointer -= length;
                if piece_index > 6 {
                    return fail(errors, ValidationError::Ipv4InIpv6TooManyPieces);
                }

                let mut numbers_seen = 0;
                while let Some(mut c) = at(pointer) {
                    if numbers_seen > 0 {
                        if c == '.' && numbers_seen < 4 {
                            pointer += 1;
                            match at(pointer) {
                                Some(next) => c = next,
                                None => {
                                    return fail(
                                        errors,
                                        ValidationError::Ipv4InIpv6InvalidCodePoint,
                                    );
                                }
                            }
                        } else {
                            return fail(errors, ValidationError::Ipv4InIpv6InvalidCodePoint);
                        }
                    }

                    if !c.is_ascii_digit() {
                        return fail(errors, ValidationError::Ipv4InIpv6InvalidCodePoint);
                    }

                    let mut ipv4_piece: Option<u16> = None;
                    while let Some(digit) = at(pointer).and_then(|c| c.to_digit(10)) {
                        ipv4_piece = match ipv4_piece {
                            None => Some(digit as u16),
                            // Leading zeros are not allowed
                            Some(0) => {
                                return fail(errors, ValidationError::Ipv4InIpv6InvalidCodePoint);
                            }
                            Some(piece) => Some(piece * 10 + digit as u16),
                        };
                        if ipv4_piece.is_some_and(|piece| piece > 255) {
                            return fail(errors, ValidationError::Ipv4InIpv6OutOfRangePart);
                        }
                        pointer += 1;
                    }

                    let piece = ipv4_piece.unwrap_or_default();
                    address[piece_index] = address[piece_index] * 0x100 + piece;
                    numbers_seen += 1;
                    if numbers_seen == 2 || numbers_seen == 4 {
                        piece_index += 1;
                    }
                }

                if numbers_seen != 4 {
                    return fail(errors, ValidationError::Ipv4InIpv6TooFewParts);
                }
                break;
            }
            Some(':') => {
                pointer += 1;
                if at(pointer).is_none() {
                    return fail(errors, ValidationError::Ipv6InvalidCodePoint);
                }
            }
            Some(_) => return fail(errors, ValidationError::Ipv6InvalidCodePoint),
            None => {}
        }

        address[piece_index] = value;
        piece_index += 1;
    }

    if let Some(compress) = compress {
        // Move the pieces after the compression point to the end
        let mut swaps = piece_index - compress;
        piece_index = 7;
        while piece_index != 0 && swaps > 0 {
            address.swap(piece_index, compress + swaps - 1);
            piece_index -= 1;
            swaps -= 1;
        }
    } else if piece_index != 8 {
        return fail(errors, ValidationError::Ipv6TooFewPieces);
    }

    Ok(address)
}

/// Serialize IPv6 pieces with zero compression, without brackets.
pub fn serialize_ipv6(pieces: &[u16; 8]) -> String {
    let mut result = String::with_capacity(39);
    let compress = find_longest_zero_sequence(pieces);
    let mut ignore_zero = false;

    for (i, &piece) in pieces.iter().enumerate() {
        if ignore_zero && piece == 0 {
            continue;
        }
        ignore_zero = false;

        if compress == Some(i) {
            result.push_str(if i == 0 { "::" } else { ":" });
            ignore_zero = true;
            continue;
        }

        let _ = write!(&mut result, "{piece:x}");
        if i != 7 {
            result.push(':');
        }
    }

    result
}

/// Find the first longest run of two or more zero pieces.
fn find_longest_zero_sequence(pieces: &[u16; 8]) -> Option<usize> {
    let mut best_start: Option<usize> = None;
    let mut best_len = 1;
    let mut current_start = 0;
    let mut current_len = 0;

    for (i, &piece) in pieces.iter().enumerate() {
        if piece == 0 {
            if current_len == 0 {
                current_start = i;
            }
            current_len += 1;
            if current_len > best_len {
                best_start = Some(current_start);
                best_len = current_len;
            }
        } else {
            current_len = 0;
        }
    }

    best_start
}
