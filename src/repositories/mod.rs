pub mod google_maps_repo;
