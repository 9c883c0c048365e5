/// UI components
///
/// - Character list rows and status coloring (row.rs)
/// - Circular avatars loaded per row (avatar.rs)

pub mod avatar;
pub mod row;
