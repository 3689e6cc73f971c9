//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 비밀 값 마스킹
//! - [`display_terminal`] - 시작 배너 출력

pub mod string_utils;
pub mod display_terminal;
