pub mod astar;
pub mod bfs;
pub mod dijkstra;

pub use astar::astar_shortest_path;
pub use bfs::bfs_shortest_path;
pub use dijkstra::dijkstra_shortest_paths;
