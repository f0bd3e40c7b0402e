pub mod airport_mapper;
