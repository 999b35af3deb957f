/// Token that ties a response to the request that produced it.
///
/// In-flight requests are not cancelled. Each dispatch takes the next
/// token and a response is applied only while its token is still the
/// newest one, so a slow response can never overwrite a newer one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestSeq(u64);

impl RequestSeq {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
