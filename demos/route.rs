//! ASCII route demo: parse a map, compute the spawn-to-spawn route, and
//! show how validated obstacle placement reroutes it.
//!
//! Run with `RUST_LOG=debug` to see the engine's node-graph and placement
//! logging.

use std::collections::HashSet;

use towerpath_core::{Point, Vec2};
use towerpath_map::{Level, TileMap};
use towerpath_paths::TileGrid;

const MAP: &str = "\
..........
.####.###.
.#........
.#.######.
.#........
.####.###.
..........";

fn render(level: &Level, route_cells: &HashSet<Point>) {
    let bounds = level.map().bounds();
    for y in bounds.min.y..bounds.max.y {
        let mut line = String::new();
        for x in bounds.min.x..bounds.max.x {
            let p = Point::new(x, y);
            let ch = if p == level.entry() {
                'E'
            } else if p == level.exit() {
                'X'
            } else if route_cells.contains(&p) {
                '*'
            } else if level.map().is_walkable(p) {
                '.'
            } else {
                '#'
            };
            line.push(ch);
        }
        println!("{line}");
    }
}

fn show_route(level: &mut Level) {
    match level.route() {
        Some(route) => {
            println!(
                "route: {} waypoints, cost {}",
                route.len(),
                route.cost()
            );
            let cells: HashSet<Point> = route.iter().map(|w| w.coord).collect();
            render(level, &cells);
            for w in route.iter() {
                println!("  {} -> world {}", w.coord, w.world);
            }
        }
        None => {
            println!("no route between the spawns");
            render(level, &HashSet::new());
        }
    }
    println!();
}

fn main() {
    env_logger::init();

    let map = TileMap::parse(MAP, 1.0, Vec2::ZERO).expect("demo map is well-formed");
    let entry = Point::new(0, 0);
    let exit = Point::new(9, 6);
    let mut level = Level::new(map, entry, exit).expect("spawns are on the map");

    println!("initial map:");
    show_route(&mut level);

    // Funnel the route by walling part of the top corridor.
    for p in [Point::new(5, 0), Point::new(6, 0)] {
        match level.place_obstacle(p) {
            Ok(()) => println!("placed obstacle at {p}"),
            Err(e) => println!("placement at {p} rejected: {e}"),
        }
    }
    show_route(&mut level);

    // This one would sever the only remaining corridor.
    let choke = Point::new(0, 1);
    match level.place_obstacle(choke) {
        Ok(()) => println!("placed obstacle at {choke}"),
        Err(e) => println!("placement at {choke} rejected: {e}"),
    }
    show_route(&mut level);
}
