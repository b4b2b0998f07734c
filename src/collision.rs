use cgmath::*;

use crate::mask::PixelMask;

/// Tests whether any opaque pixel of `a`, with its frame's top-left corner
/// at `a_position`, overlaps any opaque pixel of `b` at `b_position`.
/// Positions are integer coordinates on a shared pixel plane.
///
/// Bounding boxes are checked first, so the bit comparison only runs for
/// candidate pairs. The comparison itself walks the overlap region row by
/// row, 32 pixels at a time.
pub fn masks_collide(
    a: &PixelMask,
    a_position: Point2<i32>,
    b: &PixelMask,
    b_position: Point2<i32>,
) -> bool {
    let a_box = a.bounds_at(a_position);
    let b_box = b.bounds_at(b_position);

    let intersection = match a_box.intersection(&b_box) {
        Some(intersection) => intersection,
        None => return false,
    };

    // Keep the bit shifting one-directional: the mask whose box starts
    // further right scans the intersection from its own word boundary
    // ("near"); the other side starts at an arbitrary bit offset ("far").
    let (near, near_box, far, far_box) = if a_box.left() > b_box.left() {
        (a, a_box, b, b_box)
    } else {
        (b, b_box, a, a_box)
    };

    let near_top = (intersection.top() - near_box.top()) as usize;
    let far_top = (intersection.top() - far_box.top()) as usize;

    let far_offset = (intersection.left() - far_box.left()) as usize;
    let skipped_far_words = far_offset / 32;
    let far_bit_offset = (far_offset % 32) as u32;

    // number of near words spanned by the intersection width
    let span_words = (intersection.width() as usize + 31) / 32;

    for i in 0..intersection.height() as usize {
        let near_row = near.row(near_top + i);
        let far_row = far.row(far_top + i);

        for j in 0..span_words {
            let near_word = near_row[j];
            let far_word = far_row[skipped_far_words + j];

            // The near word's 32-pixel window straddles two far words when
            // the grids are not word-aligned: the spill term carries the
            // next far word's high bits down under the near word's low
            // bits. A far row can end flush at the current word, in which
            // case the missing word reads as zero.
            let spill = match far_row.get(skipped_far_words + j + 1) {
                Some(&next) if far_bit_offset != 0 => next >> (32 - far_bit_offset),
                _ => 0,
            };

            let hit = ((near_word >> far_bit_offset) & far_word) | (near_word & spill);
            if hit != 0 {
                return true;
            }
        }
    }

    false
}
