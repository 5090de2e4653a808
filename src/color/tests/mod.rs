mod hsv_tests;
