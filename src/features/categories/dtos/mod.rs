mod category_dto;

pub use category_dto::{category_map, CategoryListResponseDto, CategoryMap};
