//! Storyboard frame list editing.
//!
//! Every operation takes the current frame list and returns a new one,
//! ready to hand to the store as a [`StoryboardPatch`](crate::project::StoryboardPatch).
//! Unknown ids and out-of-range moves return the list unchanged.

use crate::project::{new_id, StoryboardFrame};

/// Direction to move a frame in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Index of the frame with `id`.
pub fn position(frames: &[StoryboardFrame], id: &str) -> Option<usize> {
    frames.iter().position(|f| f.id == id)
}

/// Frame with `id`.
pub fn find_frame<'a>(frames: &'a [StoryboardFrame], id: &str) -> Option<&'a StoryboardFrame> {
    frames.iter().find(|f| f.id == id)
}

/// Append `frame` with a fresh id, numbered after the current last frame.
pub fn add_frame(frames: &[StoryboardFrame], mut frame: StoryboardFrame) -> Vec<StoryboardFrame> {
    frame.id = new_id();
    frame.frame_number = next_frame_number(frames);

    let mut updated = frames.to_vec();
    updated.push(frame);
    updated
}

/// Replace the frame whose id matches `frame.id`. Order is unchanged.
pub fn save_frame(frames: &[StoryboardFrame], frame: StoryboardFrame) -> Vec<StoryboardFrame> {
    frames
        .iter()
        .map(|f| {
            if f.id == frame.id {
                frame.clone()
            } else {
                f.clone()
            }
        })
        .collect()
}

/// Remove the frame with `id`. Remaining frames keep their numbers.
pub fn delete_frame(frames: &[StoryboardFrame], id: &str) -> Vec<StoryboardFrame> {
    frames.iter().filter(|f| f.id != id).cloned().collect()
}

/// Append a copy of the frame with `id` under a fresh id, numbered last.
pub fn duplicate_frame(frames: &[StoryboardFrame], id: &str) -> Vec<StoryboardFrame> {
    let mut updated = frames.to_vec();

    if let Some(source) = find_frame(frames, id) {
        let mut copy = source.clone();
        copy.id = new_id();
        copy.frame_number = next_frame_number(frames);
        updated.push(copy);
    }

    updated
}

/// Swap the frame at `index` with its neighbour and renumber the list.
pub fn move_frame(
    frames: &[StoryboardFrame],
    index: usize,
    direction: MoveDirection,
) -> Vec<StoryboardFrame> {
    let target = match direction {
        MoveDirection::Up => index.checked_sub(1),
        MoveDirection::Down => index.checked_add(1),
    };

    let target = match target {
        Some(t) if index < frames.len() && t < frames.len() => t,
        _ => return frames.to_vec(),
    };

    let mut updated = frames.to_vec();
    updated.swap(index, target);
    renumber_frames(updated)
}

/// Set every frame's number to its 1-based position.
pub fn renumber_frames(frames: Vec<StoryboardFrame>) -> Vec<StoryboardFrame> {
    frames
        .into_iter()
        .enumerate()
        .map(|(i, mut f)| {
            f.frame_number = (i + 1) as u32;
            f
        })
        .collect()
}

/// Total running time of the storyboard, in seconds.
/// Stored durations are not clamped, so the total is a `u64`.
pub fn total_duration(frames: &[StoryboardFrame]) -> u64 {
    frames.iter().map(|f| u64::from(f.duration)).sum()
}

fn next_frame_number(frames: &[StoryboardFrame]) -> u32 {
    (frames.len() + 1) as u32
}
