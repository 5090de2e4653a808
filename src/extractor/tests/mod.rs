mod crop_window_tests;
