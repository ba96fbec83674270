//! Тесты лексического анализа
