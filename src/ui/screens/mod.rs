pub mod humanizer;
