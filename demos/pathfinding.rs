use std::collections::HashMap;

use colored::*;
use ordered_float::OrderedFloat;

use graph_search::{astar_shortest_path, bfs_shortest_path, dijkstra_shortest_paths};

/// Represents a city grid with buildings and streets
struct CityGrid {
    width: usize,
    height: usize,
    buildings: Vec<Vec<bool>>,
}

impl CityGrid {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buildings: vec![vec![false; width]; height],
        }
    }

    fn add_building_block(&mut self, x0: usize, y0: usize, w: usize, h: usize) {
        for y in y0..(y0 + h).min(self.height) {
            for x in x0..(x0 + w).min(self.width) {
                self.buildings[y][x] = true;
            }
        }
    }

    fn is_walkable(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && !self.buildings[y][x]
    }

    fn walkable_neighbors(&self, x: usize, y: usize) -> Vec<((usize, usize), f64)> {
        let mut neighbors = Vec::new();
        let directions = [
            // Cardinal directions: N, E, S, W
            (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
            // Diagonal directions: NE, SE, SW, NW
            (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
        ];

        for (dx, dy, cost) in directions {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx >= 0 && ny >= 0 && nx < self.width as i32 && ny < self.height as i32 {
                let (nx, ny) = (nx as usize, ny as usize);
                if self.is_walkable(nx, ny) {
                    neighbors.push(((nx, ny), cost));
                }
            }
        }
        neighbors
    }

    /// Weighted adjacency over walkable cells, for Dijkstra and A*
    fn weighted_graph(
        &self,
    ) -> HashMap<(usize, usize), HashMap<(usize, usize), OrderedFloat<f64>>> {
        let mut graph = HashMap::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_walkable(x, y) {
                    let edges = self
                        .walkable_neighbors(x, y)
                        .into_iter()
                        .map(|(pos, cost)| (pos, OrderedFloat(cost)))
                        .collect();
                    graph.insert((x, y), edges);
                }
            }
        }
        graph
    }

    /// Unweighted adjacency over walkable cells, for BFS
    fn unweighted_graph(&self) -> HashMap<(usize, usize), Vec<(usize, usize)>> {
        let mut graph = HashMap::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_walkable(x, y) {
                    let neighbors = self
                        .walkable_neighbors(x, y)
                        .into_iter()
                        .map(|(pos, _)| pos)
                        .collect();
                    graph.insert((x, y), neighbors);
                }
            }
        }
        graph
    }

    fn render(&self, path: &[(usize, usize)], start: (usize, usize), goal: (usize, usize)) {
        let on_path: std::collections::HashSet<_> = path.iter().copied().collect();

        for y in 0..self.height {
            let mut row = String::new();
            for x in 0..self.width {
                let cell = if (x, y) == start {
                    "S ".red().bold().to_string()
                } else if (x, y) == goal {
                    "G ".red().bold().to_string()
                } else if self.buildings[y][x] {
                    "##".blue().to_string()
                } else if on_path.contains(&(x, y)) {
                    "* ".green().bold().to_string()
                } else {
                    ". ".dimmed().to_string()
                };
                row.push_str(&cell);
            }
            println!("{}", row);
        }
    }
}

/// Octile distance, admissible for 1.0/1.4 grid moves
fn octile(from: (usize, usize), to: (usize, usize)) -> OrderedFloat<f64> {
    let dx = (from.0 as f64 - to.0 as f64).abs();
    let dy = (from.1 as f64 - to.1 as f64).abs();
    OrderedFloat(dx.max(dy) + 0.4 * dx.min(dy))
}

fn main() {
    let mut city = CityGrid::new(25, 12);
    city.add_building_block(4, 2, 3, 7);
    city.add_building_block(10, 0, 3, 8);
    city.add_building_block(16, 4, 4, 8);

    let start = (0, 0);
    let goal = (24, 11);

    println!("--- City pathfinding: {:?} to {:?} ---\n", start, goal);

    let weighted = city.weighted_graph();
    let unweighted = city.unweighted_graph();

    match bfs_shortest_path(&unweighted, &start, &goal) {
        Some(path) => println!("BFS route: {} cells ({} moves)", path.len(), path.len() - 1),
        None => println!("BFS found no route"),
    }

    let distances = dijkstra_shortest_paths(&weighted, &start).unwrap();
    println!(
        "Dijkstra distance to goal: {:.1}",
        distances[&goal].into_inner()
    );

    match astar_shortest_path(&weighted, &start, &goal, |n| octile(*n, goal)) {
        Some((path, cost)) => {
            println!("A* route cost: {:.1} over {} cells\n", cost.into_inner(), path.len());
            city.render(&path, start, goal);
        }
        None => println!("A* found no route"),
    }
}
