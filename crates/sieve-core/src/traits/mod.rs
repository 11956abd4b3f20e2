mod label_repository;

pub use label_repository::ILabelRepository;
