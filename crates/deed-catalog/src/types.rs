/// Stable index into a catalog table. Ids follow sorted key order.
pub trait CatalogId: Copy + Eq {
    /// `None` once `index` no longer fits the id's width.
    fn from_index(index: usize) -> Option<Self>;
    fn index(self) -> usize;
}

macro_rules! catalog_id {
    ($name:ident) => {
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u16);

        impl CatalogId for $name {
            #[inline]
            fn from_index(index: usize) -> Option<Self> {
                u16::try_from(index).ok().map($name)
            }

            #[inline]
            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

catalog_id!(WallId);
catalog_id!(GroundId);
catalog_id!(CaveId);

/// A wall placed on a border: catalog entry plus facing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WallRef {
    pub id: WallId,
    pub reversed: bool,
}

impl WallRef {
    #[inline]
    pub const fn new(id: WallId, reversed: bool) -> Self {
        Self { id, reversed }
    }
}
