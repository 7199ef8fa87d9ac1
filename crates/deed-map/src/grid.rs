use crate::FLOOR_COUNT;

/// Flat storage of one value per grid vertex per floor.
#[derive(Clone, Debug)]
pub(crate) struct FloorGrid<T> {
    sx: usize,
    sy: usize,
    cells: Vec<T>,
}

impl<T: Clone> FloorGrid<T> {
    pub(crate) fn filled(sx: usize, sy: usize, value: T) -> Self {
        Self {
            sx,
            sy,
            cells: vec![value; sx * sy * FLOOR_COUNT],
        }
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, layer: usize) -> usize {
        (layer * self.sy + y) * self.sx + x
    }

    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize, layer: usize) -> &T {
        &self.cells[self.idx(x, y, layer)]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, x: usize, y: usize, layer: usize) -> &mut T {
        let i = self.idx(x, y, layer);
        &mut self.cells[i]
    }
}
