//! Domain services: business logic that belongs to no single entity or value object.

/// A stateless operation over a domain object.
///
/// Services orchestrate rules spanning several domain objects. They hold no
/// per-call state and perform no IO; infrastructure is passed in, never reached for.
pub trait DomainService<T: ?Sized> {
    type Output;

    fn execute(&self, subject: &T) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct WordCount;

    impl DomainService<str> for WordCount {
        type Output = usize;

        fn execute(&self, subject: &str) -> usize {
            subject.split_whitespace().count()
        }
    }

    #[test]
    fn executes_against_subject() {
        assert_eq!(WordCount.execute("three little words"), 3);
        assert_eq!(WordCount.execute("   "), 0);
    }
}
