//! Generated `...Ref<'a>` readers anchored to the shared buffer they read
//! from. An anchored view can be cloned, stored and sent across threads
//! without borrowing the caller's bytes.

use execgraph_bytes::Bytes;
use execgraph_common::{Result, error::Error};

use crate::defs::graph;

/// A generated table type whose reader borrows the serialized buffer.
pub(crate) trait TableView {
    /// Table name used in error reports.
    const TABLE: &'static str;

    type Ref<'a>: Clone;
}

impl TableView for graph::FlatResult {
    const TABLE: &'static str = "FlatResult";
    type Ref<'a> = graph::FlatResultRef<'a>;
}

impl TableView for graph::FlatVariable {
    const TABLE: &'static str = "FlatVariable";
    type Ref<'a> = graph::FlatVariableRef<'a>;
}

impl TableView for graph::FlatTiming {
    const TABLE: &'static str = "FlatTiming";
    type Ref<'a> = graph::FlatTimingRef<'a>;
}

pub(crate) type ResultView = OwnedView<graph::FlatResult>;
pub(crate) type VariableView = OwnedView<graph::FlatVariable>;
pub(crate) type TimingView = OwnedView<graph::FlatTiming>;

/// A table reader together with the buffer it points into.
///
/// `view` is declared before `buf` so it is dropped first. `Bytes` is
/// reference counted and never moves its data, so the `'static` reader stays
/// valid for as long as `buf` is held.
#[derive(Debug)]
pub(crate) struct OwnedView<T: TableView> {
    view: T::Ref<'static>,
    buf: Bytes,
}

impl<T: TableView> OwnedView<T> {
    /// Reads the root table of an unframed flatbuffer.
    pub fn read_root(buf: Bytes) -> Result<OwnedView<T>>
    where
        for<'a> T::Ref<'a>: planus::ReadAsRoot<'a>,
    {
        let view = <T::Ref<'_> as planus::ReadAsRoot>::read_as_root(&buf)
            .map_err(|e| Error::flatbuffer(T::TABLE, e))?;
        // SAFETY: `view` reads from the heap data of `buf`, which is moved in alongside it.
        let view = unsafe { detach::<T>(view) };
        Ok(OwnedView { view, buf })
    }

    /// The reader, with its lifetime narrowed to this anchor.
    pub fn view<'a>(&'a self) -> T::Ref<'a> {
        #[allow(clippy::unnecessary_cast)]
        let view = unsafe { &*(&self.view as *const T::Ref<'static> as *const T::Ref<'a>) };
        view.clone()
    }

    /// Anchors a nested table reached from this one to the same buffer.
    ///
    /// The `&'a ()` argument only ties the closure's lifetime to its result.
    pub fn project<U, F>(&self, f: F) -> Result<OwnedView<U>>
    where
        U: TableView,
        F: for<'a> FnOnce(T::Ref<'a>, &'a ()) -> Result<U::Ref<'a>>,
    {
        let nested = f(self.view.clone(), &())?;
        Ok(OwnedView {
            view: nested,
            buf: self.buf.clone(),
        })
    }

    pub fn buffer(&self) -> &Bytes {
        &self.buf
    }
}

impl<T: TableView> Clone for OwnedView<T> {
    fn clone(&self) -> Self {
        OwnedView {
            view: self.view.clone(),
            buf: self.buf.clone(),
        }
    }
}

/// Erases the borrow of a reader.
///
/// # Safety
///
/// The caller must keep the buffer `view` reads from alive and unmoved for as
/// long as the returned reader is used.
unsafe fn detach<'a, T: TableView>(view: T::Ref<'a>) -> T::Ref<'static> {
    let view = std::mem::ManuallyDrop::new(view);
    #[allow(clippy::unnecessary_cast)]
    unsafe {
        std::ptr::read(&*view as *const T::Ref<'a> as *const T::Ref<'static>)
    }
}

#[cfg(test)]
mod tests {
    use execgraph_bytes::Bytes;

    use super::*;
    use crate::result_builder::{ResultBuilder, VariableBuilder};

    fn two_variable_payload() -> Bytes {
        let mut builder = ResultBuilder::new(3);
        builder
            .add_variable(VariableBuilder::new(1, 0).with_name("a"))
            .unwrap();
        builder
            .add_variable(VariableBuilder::new(2, 0).with_name("b"))
            .unwrap();
        Bytes::from(builder.finish_unframed())
    }

    #[test]
    fn test_projected_view_outlives_root() {
        let payload = two_variable_payload();
        let root = ResultView::read_root(payload.clone()).unwrap();
        let second = root
            .project::<graph::FlatVariable, _>(|result, _| Ok(result.variable_at(1)?.unwrap()))
            .unwrap();
        drop(root);
        drop(payload);

        assert_eq!(second.view().name().unwrap(), Some("b"));
        let copy = second.clone();
        drop(second);
        assert_eq!(copy.view().node_id().unwrap(), 2);
    }

    #[test]
    fn test_read_root_reports_table_name() {
        let err = ResultView::read_root(Bytes::from(vec![1u8, 2])).unwrap_err();
        assert!(err.to_string().contains("FlatResult"), "{err}");
    }

    #[test]
    fn test_projection_shares_buffer() {
        let root = ResultView::read_root(two_variable_payload()).unwrap();
        let first = root
            .project::<graph::FlatVariable, _>(|result, _| Ok(result.variable_at(0)?.unwrap()))
            .unwrap();
        assert!(root.buffer().ptr_eq(first.buffer()));
    }
}
