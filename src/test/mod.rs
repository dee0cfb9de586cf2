mod shortest_paths;
