//! Nutanix sizing — an integer vCPU socket count, no identifier grammar.

/// Returns the next vCPU socket count.
///
/// Nutanix has no documented size ceiling within this engine's scope, so
/// escalation always succeeds; the count saturates rather than wrapping.
pub fn next_vcpu_sockets(current: u32) -> u32 {
    current.saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_by_one() {
        assert_eq!(next_vcpu_sockets(4), 5);
        assert_eq!(next_vcpu_sockets(0), 1);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        assert_eq!(next_vcpu_sockets(u32::MAX), u32::MAX);
    }
}
