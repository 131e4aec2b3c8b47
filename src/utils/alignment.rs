// src/utils/alignment.rs

/// Human-readable report of which of 16/32/64-byte alignments `length` meets
pub fn alignment_info(name: &str, length: u64) -> String {
    let mut info = format!("{}: ", name);
    let mut aligned = false;
    for boundary in [16u64, 32, 64] {
        if length % boundary == 0 {
            info.push_str(&format!("Aligned to {} bytes; ", boundary));
            aligned = true;
        }
    }
    if !aligned {
        info.push_str("Not aligned to 16/32/64 bytes.");
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_info() {
        assert_eq!(
            alignment_info("a.bin", 64),
            "a.bin: Aligned to 16 bytes; Aligned to 32 bytes; Aligned to 64 bytes; "
        );
        assert_eq!(alignment_info("b.bin", 48), "b.bin: Aligned to 16 bytes; ");
        assert_eq!(alignment_info("c.bin", 50), "c.bin: Not aligned to 16/32/64 bytes.");
    }
}
