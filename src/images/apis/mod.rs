pub mod novelai;
