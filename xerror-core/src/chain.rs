use std::error::Error as StdError;

/// Iterator over an error and its chain of sources.
///
/// Returned by [`Error::chain`]. The first item is the error itself,
/// followed by its cause, the cause of that cause, and so on.
///
/// [`Error::chain`]: crate::Error::chain
///
/// # Example
///
/// ```
/// use xerror_core::Error;
/// use std::io;
///
/// fn underlying_io_error_kind(error: &Error) -> Option<io::ErrorKind> {
///     for cause in error.chain() {
///         if let Some(io_error) = cause.downcast_ref::<io::Error>() {
///             return Some(io_error.kind());
///         }
///     }
///     None
/// }
///
/// let error = Error::wrap(500, io::Error::other("disk on fire"), "write failed");
/// assert_eq!(underlying_io_error_kind(&error), Some(io::ErrorKind::Other));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(head: Option<&'a (dyn StdError + 'static)>) -> Self {
        Self { next: head }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let error = self.next?;
        self.next = error.source();
        Some(error)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Chain<'_> {
    fn len(&self) -> usize {
        let mut len = 0;
        let mut next = self.next;
        while let Some(cause) = next {
            next = cause.source();
            len += 1;
        }
        len
    }
}
